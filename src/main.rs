//! Runs a drawing script.
//!
//! ```text
//! linework              # runs ./script.txt
//! linework shapes.txt   # runs the given script
//! ```
//!
//! `display` prints the drawing as SVG to stdout; `save` writes SVG files.

use std::error::Error;
use std::process::ExitCode;

use linework::render::SvgSurface;
use linework::{Drawing, InterpreterOptions};

const DEFAULT_SCRIPT: &str = "script.txt";

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for linework.
    // Override with RUST_LOG env var (e.g. RUST_LOG=linework=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("linework=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let script = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SCRIPT.to_owned());

    match run(&script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(script: &str) -> linework::Result<()> {
    let options = InterpreterOptions::default();
    let surface = SvgSurface::open(options.width, options.height, &options.title)?;
    let mut drawing = Drawing::new(surface, options);
    drawing.run_file(script)?;
    Ok(())
}
