mod make_bezier;
mod make_circle;
mod make_hermite;

pub use make_bezier::MakeBezier;
pub use make_circle::MakeCircle;
pub use make_hermite::MakeHermite;

use crate::geometry::Curve;
use crate::tessellation::{TessellateCurve, TessellationParams};
use crate::topology::EdgeList;

/// Samples `curve` and appends the resulting polyline, returning the number
/// of edges added.
fn ingest(curve: &dyn Curve, params: TessellationParams, edges: &mut EdgeList) -> usize {
    let polyline = TessellateCurve::new(curve, params).execute();
    let before = edges.len();
    edges.add_polyline(&polyline.points);
    edges.len() - before
}
