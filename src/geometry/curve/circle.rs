use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{Curve, CurveDomain};

/// A full circle parallel to the XY plane.
///
/// The parametric domain is `[0, 1]`, one full counter-clockwise turn:
///
/// `P(t) = (cx + r * cos(2*pi*t), cy + r * sin(2*pi*t), cz)`
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point3,
    radius: f64,
}

impl Circle {
    /// Creates a new circle. The z-depth is the z coordinate of `center`.
    ///
    /// A zero radius is accepted and yields a degenerate polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "circle radius must be non-negative, got {radius}"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        let angle = t * TAU;
        Point3::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        true
    }
}
