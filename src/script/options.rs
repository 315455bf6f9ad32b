use crate::operations::transform::ApplyMode;
use crate::tessellation::Step;

/// Unit of the angle given to the `rotate` directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts an angle in this unit to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }
}

/// What to do with a directive keyword the interpreter does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectivePolicy {
    /// Log a warning and carry on with the next line.
    #[default]
    Permissive,
    /// Abort the script.
    Strict,
}

/// Settings for one interpreter run.
#[derive(Debug, Clone)]
pub struct InterpreterOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Surface title.
    pub title: String,
    /// Sampling step for circles and curves.
    pub step: Step,
    /// Unit of `rotate` angles.
    pub angle_unit: AngleUnit,
    /// Whether `apply` keeps or resets the cumulative transform.
    pub apply_mode: ApplyMode,
    /// Handling of unknown directives.
    pub directive_policy: DirectivePolicy,
    /// Empty the edge list after each `display` or `save`.
    pub clear_after_render: bool,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: "Drawing".to_owned(),
            step: Step::DEFAULT,
            angle_unit: AngleUnit::default(),
            apply_mode: ApplyMode::default(),
            directive_policy: DirectivePolicy::default(),
            clear_after_render: false,
        }
    }
}
