use crate::error::Result;
use crate::math::matrix::multiply;
use crate::math::{DMatrix, Point3, Vector3};

use super::{Curve, CurveDomain};

/// Cubic Hermite basis in power form, one row per coefficient `a, b, c, d`.
#[rustfmt::skip]
const HERMITE_BASIS: [f64; 16] = [
     2.0, -2.0,  1.0,  1.0,
    -3.0,  3.0, -2.0, -1.0,
     0.0,  0.0,  1.0,  0.0,
     1.0,  0.0,  0.0,  0.0,
];

/// A cubic Hermite curve between two endpoints with prescribed tangents.
///
/// The coefficients `[a; b; c; d] = H * [P0; P1; R0; R1]` are computed once,
/// after which `P(t) = a*t^3 + b*t^2 + c*t + d`.
#[derive(Debug, Clone)]
pub struct Hermite {
    coefficients: [Vector3; 4],
}

impl Hermite {
    /// Creates a Hermite curve from endpoints `p0`, `p1` and the tangents
    /// `r0`, `r1` at those endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient product cannot be formed.
    pub fn new(p0: Point3, p1: Point3, r0: Vector3, r1: Vector3) -> Result<Self> {
        let basis = DMatrix::from_row_slice(4, 4, &HERMITE_BASIS);
        let geometry = DMatrix::from_row_slice(
            4,
            3,
            &[
                p0.x, p0.y, p0.z, //
                p1.x, p1.y, p1.z, //
                r0.x, r0.y, r0.z, //
                r1.x, r1.y, r1.z,
            ],
        );
        let product = multiply(&basis, &geometry)?;
        let row = |i: usize| Vector3::new(product[(i, 0)], product[(i, 1)], product[(i, 2)]);
        Ok(Self {
            coefficients: [row(0), row(1), row(2), row(3)],
        })
    }

    /// Returns the power-form coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> &[Vector3; 4] {
        &self.coefficients
    }
}

impl Curve for Hermite {
    fn evaluate(&self, t: f64) -> Point3 {
        let [a, b, c, d] = &self.coefficients;
        // Horner form of a*t^3 + b*t^2 + c*t + d
        Point3::from(((a * t + b) * t + c) * t + d)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn v(x: f64, y: f64) -> Vector3 {
        Vector3::new(x, y, 0.0)
    }

    #[test]
    fn starts_at_first_endpoint() {
        let curve = Hermite::new(p(150.0, 150.0), p(350.0, 150.0), v(300.0, 0.0), v(0.0, 300.0)).unwrap();
        assert_eq!(curve.evaluate(0.0), p(150.0, 150.0));
    }

    #[test]
    fn ends_at_second_endpoint() {
        let curve = Hermite::new(p(150.0, 150.0), p(350.0, 150.0), v(300.0, 0.0), v(0.0, 300.0)).unwrap();
        assert_relative_eq!(curve.evaluate(1.0), p(350.0, 150.0), epsilon = 1e-9);
    }

    #[test]
    fn coefficients_match_basis() {
        let curve = Hermite::new(p(0.0, 0.0), p(1.0, 0.0), v(1.0, 1.0), v(1.0, -1.0)).unwrap();
        let [a, b, c, d] = curve.coefficients();
        // a = 2 P0 - 2 P1 + R0 + R1
        assert_relative_eq!(*a, v(0.0, 0.0));
        // b = -3 P0 + 3 P1 - 2 R0 - R1
        assert_relative_eq!(*b, v(0.0, -1.0));
        assert_relative_eq!(*c, v(1.0, 1.0));
        assert_relative_eq!(*d, v(0.0, 0.0));
    }

    #[test]
    fn zero_tangents_trace_the_chord() {
        let curve = Hermite::new(p(0.0, 0.0), p(2.0, 4.0), v(0.0, 0.0), v(0.0, 0.0)).unwrap();
        let mid = curve.evaluate(0.5);
        assert_relative_eq!(mid, p(1.0, 2.0), epsilon = 1e-12);
    }
}
