mod general;
mod pipeline;

pub use general::GeneralTransform;
pub use pipeline::{ApplyMode, TransformPipeline};
