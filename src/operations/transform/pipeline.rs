use tracing::debug;

use crate::math::{transform, Matrix4};
use crate::topology::EdgeList;

use super::GeneralTransform;

/// What happens to the cumulative matrix after it has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplyMode {
    /// Keep the matrix; a second `apply` transforms the geometry again.
    #[default]
    Retain,
    /// Reset the matrix to identity once it has been applied.
    Reset,
}

/// Accumulates transforms and applies them to an edge list on demand.
///
/// Transforms take effect in the order they are composed: composing a scale
/// and then a translation scales first and translates second.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    cumulative: Matrix4,
    mode: ApplyMode,
}

impl TransformPipeline {
    /// Creates a pipeline holding the identity matrix.
    #[must_use]
    pub fn new(mode: ApplyMode) -> Self {
        Self {
            cumulative: transform::identity(),
            mode,
        }
    }

    /// Returns the cumulative matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.cumulative
    }

    /// Returns the apply mode.
    #[must_use]
    pub fn mode(&self) -> ApplyMode {
        self.mode
    }

    /// Returns whether any transform is waiting to be applied.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.cumulative != transform::identity()
    }

    /// Resets the cumulative matrix to identity.
    pub fn ident(&mut self) {
        self.cumulative = transform::identity();
    }

    /// Composes `matrix` after everything accumulated so far.
    pub fn compose(&mut self, matrix: &Matrix4) {
        self.cumulative = matrix * self.cumulative;
        debug!(cumulative = ?self.cumulative, "composed transform");
    }

    /// Applies the cumulative matrix to every point of `edges`.
    pub fn apply(&mut self, edges: &mut EdgeList) {
        let count = GeneralTransform::new(self.cumulative).execute(edges);
        debug!(edges = count, mode = ?self.mode, "applied cumulative transform");
        if self.mode == ApplyMode::Reset {
            self.ident();
        }
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new(ApplyMode::default())
    }
}
