//! The drawing-script interpreter.
//!
//! A script is a sequence of directive lines, each followed by a fixed number
//! of argument lines:
//!
//! ```text
//! line
//! 0 0 0
//! 100 100 0
//! scale
//! 2 2 2
//! apply
//! save
//! out.svg
//! ```

mod directive;
mod options;
mod reader;

pub use directive::Directive;
pub use options::{AngleUnit, DirectivePolicy, InterpreterOptions};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, ScriptError};
use crate::math::{transform, Axis, Point3, Vector3};
use crate::operations::creation::{MakeBezier, MakeCircle, MakeHermite};
use crate::operations::transform::TransformPipeline;
use crate::render::{self, Surface};
use crate::tessellation::TessellationParams;
use crate::topology::EdgeList;

use reader::ScriptReader;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The script ran out of lines.
    Completed,
    /// A `quit` directive stopped the script.
    Quit,
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// How the run ended.
    pub status: RunStatus,
    /// Number of directives executed, `quit` included. Ignored unknown
    /// directives are not counted.
    pub directives: usize,
}

enum Flow {
    Continue,
    Quit,
}

/// A drawing session: one edge list, one cumulative transform and one
/// surface, driven by a script.
///
/// The surface is closed when [`Drawing::run`] returns, whether the script
/// succeeded or not, so a `Drawing` runs a single script.
#[derive(Debug)]
pub struct Drawing<S: Surface> {
    edges: EdgeList,
    pipeline: TransformPipeline,
    surface: S,
    options: InterpreterOptions,
}

impl<S: Surface> Drawing<S> {
    /// Creates a session drawing onto `surface`.
    #[must_use]
    pub fn new(surface: S, options: InterpreterOptions) -> Self {
        Self {
            edges: EdgeList::new(),
            pipeline: TransformPipeline::new(options.apply_mode),
            surface,
            options,
        }
    }

    /// Returns the edges drawn so far.
    #[must_use]
    pub fn edges(&self) -> &EdgeList {
        &self.edges
    }

    /// Returns the transform pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the options this session was created with.
    #[must_use]
    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Consumes the session, returning its surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Reads a script file and runs it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the script fails.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<RunOutcome> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => self.run(&source),
            Err(source) => {
                let err = ScriptError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                self.finish(Err(err.into()))
            }
        }
    }

    /// Runs a script, then closes the surface.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a directive; the remaining
    /// directives are not executed.
    pub fn run(&mut self, source: &str) -> Result<RunOutcome> {
        let result = self.interpret(source);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<RunOutcome>) -> Result<RunOutcome> {
        let closed = self.surface.close();
        let outcome = result?;
        closed?;
        info!(status = ?outcome.status, directives = outcome.directives, edges = self.edges.len(), "script finished");
        Ok(outcome)
    }

    fn interpret(&mut self, source: &str) -> Result<RunOutcome> {
        let mut reader = ScriptReader::new(source);
        let mut directives = 0;

        while let Some((line, keyword)) = reader.next_directive() {
            let Some(directive) = Directive::from_keyword(keyword) else {
                match self.options.directive_policy {
                    DirectivePolicy::Permissive => {
                        warn!(line, directive = keyword, "ignoring unknown directive");
                        continue;
                    }
                    DirectivePolicy::Strict => {
                        return Err(ScriptError::UnknownDirective {
                            line,
                            directive: keyword.to_owned(),
                        }
                        .into());
                    }
                }
            };

            debug!(line, directive = directive.keyword(), "executing directive");
            directives += 1;
            if let Flow::Quit = self.execute(directive, &mut reader)? {
                return Ok(RunOutcome {
                    status: RunStatus::Quit,
                    directives,
                });
            }
        }

        Ok(RunOutcome {
            status: RunStatus::Completed,
            directives,
        })
    }

    fn execute(&mut self, directive: Directive, reader: &mut ScriptReader<'_>) -> Result<Flow> {
        let name = directive.keyword();
        let params = TessellationParams::new(self.options.step);

        match directive {
            Directive::Line => {
                let [x0, y0, z0] = reader.numbers(name)?;
                let [x1, y1, z1] = reader.numbers(name)?;
                self.edges
                    .add_edge(Point3::new(x0, y0, z0), Point3::new(x1, y1, z1));
            }
            Directive::Circle => {
                let [cx, cy, cz, r] = reader.numbers(name)?;
                MakeCircle::new(Point3::new(cx, cy, cz), r, params).execute(&mut self.edges)?;
            }
            Directive::Bezier => {
                let [x0, y0, x1, y1, x2, y2, x3, y3] = reader.numbers(name)?;
                let control = vec![
                    Point3::new(x0, y0, 0.0),
                    Point3::new(x1, y1, 0.0),
                    Point3::new(x2, y2, 0.0),
                    Point3::new(x3, y3, 0.0),
                ];
                MakeBezier::new(control, params).execute(&mut self.edges)?;
            }
            Directive::Hermite => {
                let [x0, y0, x1, y1, rx0, ry0, rx1, ry1] = reader.numbers(name)?;
                MakeHermite::new(
                    Point3::new(x0, y0, 0.0),
                    Point3::new(x1, y1, 0.0),
                    Vector3::new(rx0, ry0, 0.0),
                    Vector3::new(rx1, ry1, 0.0),
                    params,
                )
                .execute(&mut self.edges)?;
            }
            Directive::Ident => self.pipeline.ident(),
            Directive::Scale => {
                let [sx, sy, sz] = reader.numbers(name)?;
                self.pipeline.compose(&transform::scale(sx, sy, sz));
            }
            Directive::Translate => {
                let [tx, ty, tz] = reader.numbers(name)?;
                self.pipeline.compose(&transform::translate(tx, ty, tz));
            }
            Directive::Rotate => {
                let (_, axis) = reader.argument_line(name)?;
                let axis: Axis = axis.parse()?;
                let [theta] = reader.numbers(name)?;
                let theta = self.options.angle_unit.to_radians(theta);
                debug!(%axis, theta, "rotation in radians");
                self.pipeline.compose(&transform::rotate(axis, theta));
            }
            Directive::Apply => self.pipeline.apply(&mut self.edges),
            Directive::Display => {
                render::draw_edges(&mut self.surface, &self.edges)?;
                self.surface.block_until_closed()?;
                self.after_render();
            }
            Directive::Save => {
                let (line, file) = reader.argument_line(name)?;
                if file.is_empty() {
                    return Err(ScriptError::Parse {
                        line,
                        directive: name.to_owned(),
                        message: "missing file name".to_owned(),
                    }
                    .into());
                }
                render::draw_edges(&mut self.surface, &self.edges)?;
                self.surface.export_to_file(Path::new(file))?;
                self.after_render();
            }
            Directive::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn after_render(&mut self) {
        if self.options.clear_after_render {
            self.edges.clear();
        }
    }
}
