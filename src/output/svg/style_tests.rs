//! Tests for SVG styling primitives.

use super::*;

#[test]
fn text_anchor_display_formats() {
    assert_eq!(format!("{}", TextAnchor::Start), "start");
    assert_eq!(format!("{}", TextAnchor::Middle), "middle");
    assert_eq!(format!("{}", TextAnchor::End), "end");
}

#[test]
fn text_anchor_default_is_start() {
    assert_eq!(TextAnchor::default(), TextAnchor::Start);
}

#[test]
fn font_weight_display_formats() {
    assert_eq!(FontWeight::Normal.to_string(), "normal");
    assert_eq!(FontWeight::SemiBold.to_string(), "600");
    assert_eq!(FontWeight::Bold.to_string(), "bold");
}
