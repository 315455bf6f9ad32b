use std::str::FromStr;

use crate::error::GeometryError;
use crate::math::Point3;

/// A directed line segment between two points, the atomic drawable unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start point of the edge.
    pub start: Point3,
    /// End point of the edge.
    pub end: Point3,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// How a point sequence was produced.
///
/// Both kinds are ingested identically, one edge per consecutive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    Line,
    Bezier,
}

impl FromStr for CurveType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "bezier" => Ok(Self::Bezier),
            other => Err(GeometryError::InvalidCurveType(other.to_owned())),
        }
    }
}
