use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::math::Point2;

use super::Surface;

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Clear,
    Segment(Point2, Point2),
    Refresh,
    BlockUntilClosed,
    Export(PathBuf),
    Close,
}

/// An in-memory surface that records every call made on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    title: String,
    events: Vec<SurfaceEvent>,
    closed: bool,
}

impl RecordingSurface {
    /// Opens a recording surface.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn open(width: u32, height: u32, title: &str) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            title: title.to_owned(),
            ..Self::default()
        })
    }

    /// Returns every recorded call, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Returns the segments currently on the surface, i.e. those drawn
    /// since the last clear.
    #[must_use]
    pub fn segments(&self) -> Vec<(Point2, Point2)> {
        let since_clear = self
            .events
            .iter()
            .rposition(|e| *e == SurfaceEvent::Clear)
            .map_or(0, |i| i + 1);
        self.events[since_clear..]
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Segment(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    /// Returns the paths passed to `export_to_file`, in call order.
    #[must_use]
    pub fn exports(&self) -> Vec<&Path> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Export(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Returns the surface size as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the surface title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the surface has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn record(&mut self, event: SurfaceEvent) -> Result<(), RenderError> {
        if self.closed {
            return Err(RenderError::Closed);
        }
        self.events.push(event);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn draw_segment(&mut self, start: Point2, end: Point2) -> Result<(), RenderError> {
        self.record(SurfaceEvent::Segment(start, end))
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.record(SurfaceEvent::Clear)
    }

    fn refresh(&mut self) -> Result<(), RenderError> {
        self.record(SurfaceEvent::Refresh)
    }

    fn block_until_closed(&mut self) -> Result<(), RenderError> {
        self.record(SurfaceEvent::BlockUntilClosed)
    }

    fn export_to_file(&mut self, path: &Path) -> Result<(), RenderError> {
        self.record(SurfaceEvent::Export(path.to_path_buf()))
    }

    fn close(&mut self) -> Result<(), RenderError> {
        if !self.closed {
            self.events.push(SurfaceEvent::Close);
            self.closed = true;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_fails() {
        assert!(RecordingSurface::open(0, 10, "x").is_err());
    }

    #[test]
    fn segments_since_last_clear() {
        let mut s = RecordingSurface::open(10, 10, "x").unwrap();
        s.draw_segment(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
        s.clear().unwrap();
        s.draw_segment(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0)).unwrap();
        assert_eq!(s.segments(), vec![(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0))]);
    }

    #[test]
    fn closed_surface_rejects_drawing() {
        let mut s = RecordingSurface::open(10, 10, "x").unwrap();
        s.close().unwrap();
        s.close().unwrap();
        assert!(matches!(s.clear(), Err(RenderError::Closed)));
        assert_eq!(s.events(), &[SurfaceEvent::Close]);
    }
}
