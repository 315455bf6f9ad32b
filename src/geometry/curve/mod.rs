mod bezier;
mod circle;
mod hermite;

pub use bezier::Bezier;
pub use circle::Circle;
pub use hermite::Hermite;

use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit domain `[0, 1]` shared by every generator in this module.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns `t_max - t_min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Maps a fraction in `[0, 1]` onto this domain.
    #[must_use]
    pub fn lerp(&self, fraction: f64) -> f64 {
        if fraction >= 1.0 {
            return self.t_max;
        }
        self.t_min + self.span() * fraction
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
