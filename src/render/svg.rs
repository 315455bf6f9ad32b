use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RenderError;
use crate::math::Point2;

use super::Surface;

/// A headless surface that renders to a standalone SVG document.
///
/// Coordinates are used as-is, with the origin in the top-left corner and
/// y growing downwards. Since there is no window, `block_until_closed`
/// writes the current document to the display sink (stdout by default) and
/// returns immediately.
pub struct SvgSurface {
    width: u32,
    height: u32,
    title: String,
    segments: Vec<(Point2, Point2)>,
    display: Box<dyn Write>,
    closed: bool,
}

impl SvgSurface {
    /// Opens an SVG surface that displays to stdout.
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
            segments: Vec::new(),
            display: Box::new(io::stdout()),
            closed: false,
        })
    }

    /// Replaces the sink `block_until_closed` writes the document to.
    #[must_use]
    pub fn with_display(mut self, sink: impl Write + 'static) -> Self {
        self.display = Box::new(sink);
        self
    }

    /// Returns the segments currently on the surface.
    #[must_use]
    pub fn segments(&self) -> &[(Point2, Point2)] {
        &self.segments
    }

    /// Writes the SVG document for the current segments.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_document<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        writeln!(writer, "  <title>{}</title>", Escaped(&self.title))?;
        writeln!(
            writer,
            r#"  <rect width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        )?;
        writeln!(writer, r#"  <g stroke="black" stroke-width="1" fill="none">"#)?;
        for (start, end) in &self.segments {
            writeln!(
                writer,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                start.x, start.y, end.x, end.y
            )?;
        }
        writeln!(writer, "  </g>")?;
        writeln!(writer, "</svg>")
    }

    /// Returns the SVG document for the current segments.
    #[must_use]
    pub fn document(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_document(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.closed {
            return Err(RenderError::Closed);
        }
        Ok(())
    }
}

impl fmt::Debug for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .field("segments", &self.segments.len())
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl Surface for SvgSurface {
    fn draw_segment(&mut self, start: Point2, end: Point2) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.segments.push((start, end));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.segments.clear();
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), RenderError> {
        self.ensure_open()
    }

    fn block_until_closed(&mut self) -> Result<(), RenderError> {
        self.ensure_open()?;
        let mut buf = Vec::new();
        let written = self
            .write_document(&mut buf)
            .and_then(|()| self.display.write_all(&buf))
            .and_then(|()| self.display.flush());
        written.map_err(|source| RenderError::Io {
            path: PathBuf::from("<display>"),
            source,
        })
    }

    fn export_to_file(&mut self, path: &Path) -> Result<(), RenderError> {
        self.ensure_open()?;
        std::fs::write(path, self.document()).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), segments = self.segments.len(), "exported drawing");
        Ok(())
    }

    fn close(&mut self) -> Result<(), RenderError> {
        self.closed = true;
        Ok(())
    }
}

/// Escapes text for use inside an XML element.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
