use crate::error::Result;
use crate::geometry::Hermite;
use crate::math::{Point3, Vector3};
use crate::tessellation::TessellationParams;
use crate::topology::EdgeList;

use super::ingest;

/// Adds a sampled cubic Hermite curve to an edge list.
pub struct MakeHermite {
    p0: Point3,
    p1: Point3,
    r0: Vector3,
    r1: Vector3,
    params: TessellationParams,
}

impl MakeHermite {
    /// Creates a new `MakeHermite` operation from two endpoints and the
    /// tangents at those endpoints.
    #[must_use]
    pub fn new(
        p0: Point3,
        p1: Point3,
        r0: Vector3,
        r1: Vector3,
        params: TessellationParams,
    ) -> Self {
        Self {
            p0,
            p1,
            r0,
            r1,
            params,
        }
    }

    /// Executes the operation, returning the number of edges added.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve coefficients cannot be computed.
    pub fn execute(&self, edges: &mut EdgeList) -> Result<usize> {
        let curve = Hermite::new(self.p0, self.p1, self.r0, self.r1)?;
        Ok(ingest(&curve, self.params, edges))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::Step;

    #[test]
    fn adds_one_edge_per_step() {
        let mut edges = EdgeList::new();
        let params = TessellationParams::new(Step::new(0.1).unwrap());
        let added = MakeHermite::new(
            Point3::new(100.0, 250.0, 0.0),
            Point3::new(400.0, 250.0, 0.0),
            Vector3::new(0.0, 400.0, 0.0),
            Vector3::new(0.0, -400.0, 0.0),
            params,
        )
        .execute(&mut edges)
        .unwrap();
        assert_eq!(added, 10);
        assert_eq!(edges.edges()[0].start, Point3::new(100.0, 250.0, 0.0));
        assert!((edges.edges()[9].end - Point3::new(400.0, 250.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn degenerate_curve_is_legal() {
        let mut edges = EdgeList::new();
        let q = Point3::new(3.0, 3.0, 0.0);
        let added = MakeHermite::new(q, q, Vector3::zeros(), Vector3::zeros(), TessellationParams::default())
            .execute(&mut edges)
            .unwrap();
        assert_eq!(added, 100);
        assert!(edges.iter().all(|e| e.length() < 1e-12));
    }
}
