use crate::error::Result;
use crate::geometry::Circle;
use crate::math::Point3;
use crate::tessellation::TessellationParams;
use crate::topology::EdgeList;

use super::ingest;

/// Adds a sampled circle to an edge list.
pub struct MakeCircle {
    center: Point3,
    radius: f64,
    params: TessellationParams,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation. The circle lies in the plane
    /// `z = center.z`.
    #[must_use]
    pub fn new(center: Point3, radius: f64, params: TessellationParams) -> Self {
        Self {
            center,
            radius,
            params,
        }
    }

    /// Executes the operation, returning the number of edges added.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn execute(&self, edges: &mut EdgeList) -> Result<usize> {
        let circle = Circle::new(self.center, self.radius)?;
        Ok(ingest(&circle, self.params, edges))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::Step;

    #[test]
    fn default_step_adds_100_edges() {
        let mut edges = EdgeList::new();
        let added = MakeCircle::new(Point3::new(250.0, 250.0, 0.0), 50.0, TessellationParams::default())
            .execute(&mut edges)
            .unwrap();
        assert_eq!(added, 100);
        let first = edges.edges()[0].start;
        let last = edges.edges()[99].end;
        assert!((first - last).norm() < 1e-9);
    }

    #[test]
    fn coarse_step() {
        let mut edges = EdgeList::new();
        let params = TessellationParams::new(Step::new(0.25).unwrap());
        let added = MakeCircle::new(Point3::origin(), 1.0, params)
            .execute(&mut edges)
            .unwrap();
        assert_eq!(added, 4);
        assert!((edges.edges()[0].end - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn negative_radius_adds_nothing() {
        let mut edges = EdgeList::new();
        let result = MakeCircle::new(Point3::origin(), -2.0, TessellationParams::default()).execute(&mut edges);
        assert!(result.is_err());
        assert!(edges.is_empty());
    }
}
