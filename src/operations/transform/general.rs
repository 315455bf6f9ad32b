use crate::math::Matrix4;
use crate::topology::EdgeList;

/// Applies an arbitrary 4x4 transformation matrix to every edge of an
/// edge list.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, modifying the edges in-place.
    ///
    /// Returns the number of edges transformed.
    pub fn execute(&self, edges: &mut EdgeList) -> usize {
        edges.transform_all(&self.matrix);
        edges.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{transform, Point3};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> EdgeList {
        let mut edges = EdgeList::new();
        edges.add_polyline(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
        ]);
        edges
    }

    #[test]
    fn identity_transform_preserves_edges() {
        let mut edges = unit_square();
        let before = edges.clone();
        let count = GeneralTransform::new(Matrix4::identity()).execute(&mut edges);
        assert_eq!(count, 4);
        assert_eq!(edges.edges(), before.edges());
    }

    #[test]
    fn translate_moves_every_endpoint() {
        let mut edges = unit_square();
        GeneralTransform::new(transform::translate(10.0, 20.0, 30.0)).execute(&mut edges);
        for edge in &edges {
            assert!(edge.start.x >= 10.0 - 1e-12 && edge.start.x <= 11.0 + 1e-12);
            assert!(edge.start.y >= 20.0 - 1e-12 && edge.start.y <= 21.0 + 1e-12);
            assert_relative_eq!(edge.end.z, 30.0);
        }
    }

    #[test]
    fn preserves_edge_order() {
        let mut edges = unit_square();
        GeneralTransform::new(transform::scale(2.0, 2.0, 2.0)).execute(&mut edges);
        assert_relative_eq!(edges.edges()[1].start, p(2.0, 0.0, 0.0));
        assert_relative_eq!(edges.edges()[1].end, p(2.0, 2.0, 0.0));
        assert_relative_eq!(edges.edges()[3].end, p(0.0, 0.0, 0.0));
    }
}
