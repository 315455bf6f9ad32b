use crate::error::Result;
use crate::geometry::Bezier;
use crate::math::Point3;
use crate::tessellation::TessellationParams;
use crate::topology::EdgeList;

use super::ingest;

/// Adds a sampled Bézier curve to an edge list.
pub struct MakeBezier {
    control_points: Vec<Point3>,
    params: TessellationParams,
}

impl MakeBezier {
    /// Creates a new `MakeBezier` operation.
    #[must_use]
    pub fn new(control_points: Vec<Point3>, params: TessellationParams) -> Self {
        Self {
            control_points,
            params,
        }
    }

    /// Executes the operation, returning the number of edges added.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points were given.
    pub fn execute(&self, edges: &mut EdgeList) -> Result<usize> {
        let curve = Bezier::new(self.control_points.clone())?;
        Ok(ingest(&curve, self.params, edges))
    }
}
