mod step;
mod tessellate_curve;

pub use step::Step;
pub use tessellate_curve::TessellateCurve;

use crate::math::Point3;

/// Parameters controlling curve sampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TessellationParams {
    /// Parameter increment between consecutive samples.
    pub step: Step,
}

impl TessellationParams {
    /// Creates sampling parameters with the given step.
    #[must_use]
    pub fn new(step: Step) -> Self {
        Self { step }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
