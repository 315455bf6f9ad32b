pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod script;
pub mod tessellation;
pub mod topology;

pub use error::{LineworkError, Result};
pub use script::{Drawing, InterpreterOptions, RunOutcome, RunStatus};
