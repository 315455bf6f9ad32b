/// A script directive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Line,
    Circle,
    Bezier,
    Hermite,
    Ident,
    Scale,
    Translate,
    Rotate,
    Apply,
    Display,
    Save,
    Quit,
}

impl Directive {
    /// Looks up a directive by its keyword. Keywords are case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "line" => Self::Line,
            "circle" => Self::Circle,
            "bezier" => Self::Bezier,
            "hermite" => Self::Hermite,
            "ident" => Self::Ident,
            "scale" => Self::Scale,
            "translate" => Self::Translate,
            "rotate" => Self::Rotate,
            "apply" => Self::Apply,
            "display" => Self::Display,
            "save" => Self::Save,
            "quit" => Self::Quit,
            _ => return None,
        })
    }

    /// Returns the canonical keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Bezier => "bezier",
            Self::Hermite => "hermite",
            Self::Ident => "ident",
            Self::Scale => "scale",
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Apply => "apply",
            Self::Display => "display",
            Self::Save => "save",
            Self::Quit => "quit",
        }
    }
}
