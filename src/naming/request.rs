//! Generation request shapes

use std::fmt;

/// Display label used for example-based results
pub const EXAMPLE_LABEL: &str = "based on your example";

/// Tone selector for random and keyword generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Serious,
    NonSerious,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Serious, Style::NonSerious];

    /// Wire name, as used in callback identifiers and result headers
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Serious => "serious",
            Style::NonSerious => "nonserious",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generation call's parameters. Each variant carries exactly the
/// fields its prompt needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Random { style: Style },
    Keywords { style: Style, keywords: String },
    Example { example: String },
}

impl GenerationRequest {
    /// Label shown in the results header
    pub fn label(&self) -> &'static str {
        match self {
            GenerationRequest::Random { style } | GenerationRequest::Keywords { style, .. } => {
                style.as_str()
            }
            GenerationRequest::Example { .. } => EXAMPLE_LABEL,
        }
    }

    /// Short mode name for logs
    pub fn mode_name(&self) -> &'static str {
        match self {
            GenerationRequest::Random { .. } => "random",
            GenerationRequest::Keywords { .. } => "keywords",
            GenerationRequest::Example { .. } => "example",
        }
    }
}
