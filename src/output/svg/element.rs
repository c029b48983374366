//! Primitive SVG elements: full-canvas background, rectangles, text.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{FontWeight, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Rectangle covering the whole canvas.
#[derive(Debug, Clone)]
pub struct Background {
    pub fill: String,
}

impl SvgElement for Background {
    fn render(&self) -> String {
        format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            html_escape(&self.fill)
        )
    }
}

/// Positioned rectangle, used for bars and legend swatches.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub corner_radius: f64,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{}"/>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            html_escape(&self.fill),
            self.corner_radius
        )
    }
}

/// Single-line text label.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Option<TextAnchor>,
    pub fill: String,
    pub font_size: f64,
    pub weight: Option<FontWeight>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>, fill: &str, font_size: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: None,
            fill: fill.to_string(),
            font_size,
            weight: None,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = write!(output, r#"<text x="{}" y="{}""#, self.x, self.y);
        if let Some(anchor) = self.anchor {
            let _ = write!(output, r#" text-anchor="{anchor}""#);
        }
        let _ = write!(
            output,
            r#" fill="{}" font-size="{}""#,
            html_escape(&self.fill),
            self.font_size
        );
        if let Some(weight) = self.weight {
            let _ = write!(output, r#" font-weight="{weight}""#);
        }
        let _ = write!(output, ">{}</text>", html_escape(&self.content));
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
