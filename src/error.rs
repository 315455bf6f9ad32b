use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the linework interpreter.
#[derive(Debug, Error)]
pub enum LineworkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to curve construction and sampling.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("step {0} is out of range (0, 1]")]
    InvalidStep(f64),

    #[error("invalid curve type: {0:?}")]
    InvalidCurveType(String),

    #[error("curve needs at least {required} control points, got {got}")]
    NotEnoughControlPoints { required: usize, got: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the matrix algebra.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("invalid rotation axis: {0:?} (expected x, y or z)")]
    InvalidAxis(String),
}

/// Errors raised while reading or interpreting a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: `{directive}`: {message}")]
    Parse {
        line: usize,
        directive: String,
        message: String,
    },

    #[error("line {line}: unknown directive `{directive}`")]
    UnknownDirective { line: usize, directive: String },

    #[error("failed to read script {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a rendering surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("surface is closed")]
    Closed,

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`LineworkError`].
pub type Result<T> = std::result::Result<T, LineworkError>;
