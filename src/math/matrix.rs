use crate::error::MatrixError;

use super::DMatrix;

/// Multiplies two matrices of arbitrary shape.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the column count of `a`
/// differs from the row count of `b`.
pub fn multiply(a: &DMatrix, b: &DMatrix) -> Result<DMatrix, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a * b)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_product() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let c = multiply(&a, &b).unwrap();
        assert_relative_eq!(c, DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 4.0, 3.0]));
    }

    #[test]
    fn rectangular_product_shape() {
        let a = DMatrix::from_element(4, 4, 1.0);
        let b = DMatrix::from_element(4, 3, 2.0);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (4, 3));
        assert_relative_eq!(c[(3, 2)], 8.0);
    }

    #[test]
    fn three_by_three_times_four_by_four_fails() {
        let a = DMatrix::identity(3, 3);
        let b = DMatrix::identity(4, 4);
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch {
                lhs: (3, 3),
                rhs: (4, 4)
            }
        ));
    }
}
