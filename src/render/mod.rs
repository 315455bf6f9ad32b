//! The drawing surface the interpreter hands its edges to.
//!
//! A surface only ever sees 2D segments: points are projected by dropping
//! their z coordinate.

mod recording;
mod svg;

pub use recording::{RecordingSurface, SurfaceEvent};
pub use svg::SvgSurface;

use std::path::Path;

use crate::error::RenderError;
use crate::math::{Point2, Point3};
use crate::topology::EdgeList;

/// A 2D line-drawing target such as a window or an image file.
///
/// Implementations provide their own `open(width, height, title)`
/// constructor.
pub trait Surface {
    /// Draws one line segment in surface coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface can no longer be drawn on.
    fn draw_segment(&mut self, start: Point2, end: Point2) -> Result<(), RenderError>;

    /// Removes everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface can no longer be drawn on.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Makes pending drawing visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface can no longer be drawn on.
    fn refresh(&mut self) -> Result<(), RenderError>;

    /// Shows the drawing and returns once the viewer is done with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the drawing cannot be shown.
    fn block_until_closed(&mut self) -> Result<(), RenderError>;

    /// Writes the current drawing to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn export_to_file(&mut self, path: &Path) -> Result<(), RenderError>;

    /// Releases the surface. Closing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if releasing the underlying resource fails.
    fn close(&mut self) -> Result<(), RenderError>;
}

/// Projects a point onto the surface plane by dropping z.
#[must_use]
pub fn project(point: &Point3) -> Point2 {
    Point2::new(point.x, point.y)
}

/// Clears `surface`, draws every edge in order and refreshes it.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn draw_edges<S: Surface + ?Sized>(surface: &mut S, edges: &EdgeList) -> Result<(), RenderError> {
    surface.clear()?;
    for edge in edges {
        surface.draw_segment(project(&edge.start), project(&edge.end))?;
    }
    surface.refresh()
}
