//! The bundle-size comparison chart document.

use super::builder::SvgBuilder;
use super::element::{Background, Rect, SvgElement, Text};
use super::layout::{
    BAR_HEIGHT, CANVAS_HEIGHT, CANVAS_WIDTH, CHART_X, ChartGeometry, ChartLayout,
};
use super::style::{BACKGROUND, FONT_FAMILY, FontWeight, TEXT_MAIN, TEXT_SUB, TextAnchor};
use crate::framework::FrameworkSet;

const TITLE_Y: f64 = 45.0;
const SUBTITLE_Y: f64 = 75.0;
const LEGEND_Y: f64 = 115.0;
const LEGEND_START_OFFSET: f64 = 180.0;
const LEGEND_STEP: f64 = 120.0;
const SWATCH_SIZE: f64 = 15.0;

/// One legend swatch: name and fixed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

/// Proportional horizontal bar chart of bundle sizes.
///
/// The legend follows configured framework order; bars follow the layout
/// order, smallest first.
#[derive(Debug)]
pub struct BundleSizeChart<'a> {
    title: String,
    subtitle: String,
    legend: Vec<LegendItem>,
    layout: &'a ChartLayout,
}

impl<'a> BundleSizeChart<'a> {
    #[must_use]
    pub fn new(frameworks: &FrameworkSet, layout: &'a ChartLayout) -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            legend: frameworks
                .iter()
                .map(|fw| LegendItem {
                    label: fw.display_name.clone(),
                    color: fw.color.clone(),
                })
                .collect(),
            layout,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    fn push_legend(&self, mut builder: SvgBuilder) -> SvgBuilder {
        let mut x = CANVAS_WIDTH / 2.0 - LEGEND_START_OFFSET;
        for item in &self.legend {
            builder = builder
                .push_element(&Rect {
                    x,
                    y: LEGEND_Y,
                    width: SWATCH_SIZE,
                    height: SWATCH_SIZE,
                    fill: item.color.clone(),
                    corner_radius: 3.0,
                })
                .push_element(
                    &Text::new(x + 25.0, LEGEND_Y + 13.0, &item.label, TEXT_MAIN, 14.0)
                        .with_weight(FontWeight::SemiBold),
                );
            x += LEGEND_STEP;
        }
        builder
    }

    fn push_bar(builder: SvgBuilder, bar: &ChartGeometry) -> SvgBuilder {
        let weight = if bar.is_winner {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };

        builder
            .push_element(
                &Text::new(
                    CHART_X - 15.0,
                    bar.label_baseline,
                    &bar.display_name,
                    TEXT_MAIN,
                    15.0,
                )
                .with_anchor(TextAnchor::End)
                .with_weight(FontWeight::Bold),
            )
            .push_element(&Rect {
                x: CHART_X,
                y: bar.y,
                width: bar.bar_width,
                height: BAR_HEIGHT,
                fill: bar.color.clone(),
                corner_radius: 4.0,
            })
            .push_element(
                &Text::new(
                    CHART_X + bar.bar_width + 10.0,
                    bar.label_baseline,
                    &bar.label,
                    TEXT_MAIN,
                    14.0,
                )
                .with_weight(weight),
            )
    }
}

impl SvgElement for BundleSizeChart<'_> {
    fn render(&self) -> String {
        let center = CANVAS_WIDTH / 2.0;
        let mut builder = SvgBuilder::new(CANVAS_WIDTH, CANVAS_HEIGHT)
            .with_style(format!("font-family: {FONT_FAMILY}; background: {BACKGROUND};"))
            .push_element(&Background {
                fill: BACKGROUND.to_string(),
            })
            .push_element(
                &Text::new(center, TITLE_Y, &self.title, TEXT_MAIN, 26.0)
                    .with_anchor(TextAnchor::Middle)
                    .with_weight(FontWeight::Bold),
            )
            .push_element(
                &Text::new(center, SUBTITLE_Y, &self.subtitle, TEXT_SUB, 16.0)
                    .with_anchor(TextAnchor::Middle),
            );

        builder = self.push_legend(builder);
        for bar in &self.layout.entries {
            builder = Self::push_bar(builder, bar);
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
