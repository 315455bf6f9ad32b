use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// A Bézier curve of arbitrary degree, evaluated in the Bernstein basis.
///
/// For `n` control points:
///
/// `P(t) = sum_i C(n-1, i) * (1-t)^(n-1-i) * t^i * P_i`
#[derive(Debug, Clone)]
pub struct Bezier {
    control_points: Vec<Point3>,
    binomials: Vec<f64>,
}

impl Bezier {
    /// Creates a Bézier curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points are given.
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(GeometryError::NotEnoughControlPoints {
                required: 2,
                got: control_points.len(),
            }
            .into());
        }
        let binomials = binomial_row(control_points.len() - 1);
        Ok(Self {
            control_points,
            binomials,
        })
    }

    /// Creates a cubic Bézier curve from four control points.
    #[must_use]
    pub fn cubic(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            control_points: vec![p0, p1, p2, p3],
            binomials: binomial_row(3),
        }
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Returns the degree of the curve (control point count minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }
}

/// Row `n` of Pascal's triangle.
#[allow(clippy::cast_precision_loss)]
fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut c = 1.0;
    row.push(c);
    for k in 1..=n {
        c = c * (n + 1 - k) as f64 / k as f64;
        row.push(c);
    }
    row
}

impl Curve for Bezier {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn evaluate(&self, t: f64) -> Point3 {
        let n = self.degree();
        let s = 1.0 - t;
        let mut acc = Vector3::zeros();
        for (i, (p, c)) in self.control_points.iter().zip(&self.binomials).enumerate() {
            let weight = c * s.powi((n - i) as i32) * t.powi(i as i32);
            acc += p.coords * weight;
        }
        Point3::from(acc)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}
