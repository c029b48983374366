//! SVG styling primitives: report palette, text anchoring, font weight.

use std::fmt;

pub const BACKGROUND: &str = "#f8f9fa";
pub const TEXT_MAIN: &str = "#212529";
pub const TEXT_SUB: &str = "#6c757d";

pub const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// CSS font weight for text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    SemiBold,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::SemiBold => write!(f, "600"),
            Self::Bold => write!(f, "bold"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
