//! SVG document builder: root element plus a flat list of children.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Builder for flat SVG documents.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    style: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            style: String::new(),
            elements: Vec::new(),
        }
    }

    /// Inline CSS for the root element.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="100%""#,
            self.width, self.height
        );
        if !self.style.is_empty() {
            let _ = write!(output, r#" style="{}""#, html_escape(&self.style));
        }
        output.push_str(">\n");

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
