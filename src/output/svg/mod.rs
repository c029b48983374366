//! SVG chart generation for the bundle-size report.
//!
//! Layout is computed separately from rendering so the geometry can be
//! checked without parsing markup:
//! - `layout`: ranked entries to pixel geometry on a fixed 800x380 canvas
//! - `chart`: geometry plus legend to a flat SVG document

mod builder;
mod chart;
mod element;
mod format;
mod layout;
mod style;

pub use builder::SvgBuilder;
pub use chart::{BundleSizeChart, LegendItem};
pub use element::{Background, Rect, SvgElement, Text};
pub use format::html_escape;
pub use layout::{
    BAR_GAP, BAR_HEIGHT, CANVAS_HEIGHT, CANVAS_WIDTH, CHART_X, CHART_Y, ChartGeometry,
    ChartLayout, MAX_BAR_WIDTH, WINNER_MARKER, layout, size_label,
};
pub use style::{FontWeight, TextAnchor};
