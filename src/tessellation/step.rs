use crate::error::{GeometryError, Result};

/// Slack used when counting how many steps fit in the unit interval, so that
/// `1.0 / 0.01` style rounding noise does not add a spurious sample.
const COUNT_SLACK: f64 = 1e-9;

/// A validated parameter step in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step(f64);

impl Step {
    /// The step used when a script does not specify one.
    pub const DEFAULT: Self = Self(0.01);

    /// The smallest accepted step; bounds a sampling run to a million segments.
    pub const MIN: f64 = 1e-6;

    /// Creates a new step.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or not in `[MIN, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < Self::MIN || value > 1.0 {
            return Err(GeometryError::InvalidStep(value).into());
        }
        Ok(Self(value))
    }

    /// Returns the step value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of segments covering `[0, 1]`; the last one may be shorter.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn segments(self) -> usize {
        ((1.0 / self.0) - COUNT_SLACK).ceil().max(1.0) as usize
    }

    /// Iterates the sample parameters `0, s, 2s, ...` and finally exactly `1`.
    #[allow(clippy::cast_precision_loss)]
    pub fn parameters(self) -> impl Iterator<Item = f64> {
        let n = self.segments();
        (0..=n).map(move |i| if i == n { 1.0 } else { i as f64 * self.0 })
    }

    /// Iterates `i * s` for `i` in `0..=round(1/s)`, for closed curves.
    ///
    /// Whole-number turns end exactly on `1`; otherwise the last parameter
    /// stops short of it, leaving the curve open by less than one step.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn closed_parameters(self) -> impl Iterator<Item = f64> {
        let n = (1.0 / self.0).round() as usize;
        (0..=n).map(move |i| i as f64 * self.0)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}
