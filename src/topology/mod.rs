pub mod edge;

pub use edge::{CurveType, Edge};

use crate::math::{transform, Matrix4, Point3};

/// Ordered, mutable store of every edge in a drawing.
///
/// Insertion order is preserved and is the draw order.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates a new, empty edge list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one edge.
    pub fn add_edge(&mut self, start: Point3, end: Point3) {
        self.edges.push(Edge::new(start, end));
    }

    /// Appends one edge per consecutive pair of `points`.
    ///
    /// Fewer than two points add nothing.
    pub fn add_polyline(&mut self, points: &[Point3]) {
        self.edges.reserve(points.len().saturating_sub(1));
        for pair in points.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
    }

    /// Appends a sampled curve. Every [`CurveType`] connects consecutive
    /// samples, so this is [`EdgeList::add_polyline`].
    pub fn add_curve(&mut self, points: &[Point3], curve_type: CurveType) {
        match curve_type {
            CurveType::Line | CurveType::Bezier => self.add_polyline(points),
        }
    }

    /// Replaces every endpoint with its image under `matrix`, in place.
    pub fn transform_all(&mut self, matrix: &Matrix4) {
        for edge in &mut self.edges {
            edge.start = transform::apply(matrix, &edge.start);
            edge.end = transform::apply(matrix, &edge.end);
        }
    }

    /// Removes every edge.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates the edges in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the list holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn add_edge_preserves_order() {
        let mut list = EdgeList::new();
        list.add_edge(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        list.add_edge(p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0));
        list.add_edge(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert_eq!(list.len(), 3);
        assert_eq!(list.edges()[1].start, p(2.0, 2.0, 2.0));
        assert_eq!(list.edges()[0], list.edges()[2]);
    }

    #[test]
    fn polyline_connects_consecutive_points() {
        let mut list = EdgeList::new();
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        list.add_polyline(&pts);
        assert_eq!(list.len(), 3);
        for (edge, pair) in list.iter().zip(pts.windows(2)) {
            assert_eq!(edge.start, pair[0]);
            assert_eq!(edge.end, pair[1]);
        }
    }

    #[test]
    fn short_polylines_add_nothing() {
        let mut list = EdgeList::new();
        list.add_polyline(&[]);
        list.add_polyline(&[p(1.0, 2.0, 3.0)]);
        assert!(list.is_empty());
    }

    #[test]
    fn curve_types_ingest_identically() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 2.0, 0.0), p(3.0, 1.0, 0.0)];
        let mut as_line = EdgeList::new();
        as_line.add_curve(&pts, "line".parse().unwrap());
        let mut as_bezier = EdgeList::new();
        as_bezier.add_curve(&pts, "bezier".parse().unwrap());
        assert_eq!(as_line.edges(), as_bezier.edges());
    }

    #[test]
    fn unknown_curve_type_fails() {
        assert!("spline".parse::<CurveType>().is_err());
    }

    #[test]
    fn transform_all_maps_every_endpoint() {
        let mut list = EdgeList::new();
        list.add_edge(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        list.add_edge(p(1.0, 1.0, 1.0), p(-1.0, 2.0, 3.0));
        list.transform_all(&transform::scale(2.0, 3.0, 4.0));
        assert_relative_eq!(list.edges()[0].start, p(2.0, 0.0, 0.0));
        assert_relative_eq!(list.edges()[0].end, p(0.0, 3.0, 0.0));
        assert_relative_eq!(list.edges()[1].start, p(2.0, 3.0, 4.0));
        assert_relative_eq!(list.edges()[1].end, p(-2.0, 6.0, 12.0));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = EdgeList::new();
        list.add_edge(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn edge_length() {
        let edge = Edge::new(p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0));
        assert!((edge.length() - 5.0).abs() < f64::EPSILON);
    }
}
