//! SVG geometry for the HTML report charts
//!
//! Converts [`ChartData`] into pixel coordinates. The HTML template only
//! places elements; all arithmetic happens here.

use crate::core::report::chart::{AxisScale, ChartData};

const WIDTH: f64 = 640.0;
const LEFT: f64 = 72.0;
const RIGHT: f64 = 16.0;
const TOP: f64 = 16.0;

/// Round to one decimal so the markup stays short
fn px(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Drawing area inside the SVG canvas
#[derive(Debug, Clone, Copy)]
struct Frame {
    height: f64,
    bottom_margin: f64,
}

impl Frame {
    fn plot_bottom(self) -> f64 {
        self.height - self.bottom_margin
    }

    fn plot_height(self) -> f64 {
        self.plot_bottom() - TOP
    }

    fn y_for(self, seconds: f64, axis: &AxisScale) -> f64 {
        let ratio = (seconds / axis.max).clamp(0.0, 1.0);
        px(self.plot_bottom() - ratio * self.plot_height())
    }

    fn ticks(self, axis: &AxisScale) -> Vec<SvgTick> {
        axis.ticks
            .iter()
            .zip(axis.labels())
            .map(|(t, label)| {
                let y = self.y_for(*t, axis);
                SvgTick {
                    y,
                    text_y: px(y + 4.0),
                    label,
                }
            })
            .collect()
    }
}

/// Horizontal grid line with its axis label
#[derive(Debug, Clone, PartialEq)]
pub struct SvgTick {
    /// Vertical position
    pub y: f64,
    /// Baseline of the label, nudged down to sit on the line
    pub text_y: f64,
    /// `M:SS.ss` label
    pub label: String,
}

/// One rectangle of the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct SvgBar {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Bar width
    pub width: f64,
    /// Bar height
    pub height: f64,
    /// Horizontal centre, used for the category label
    pub center: f64,
    /// Category name
    pub name: &'static str,
    /// Tooltip text
    pub formatted: String,
}

/// Bar chart laid out on a fixed canvas
#[derive(Debug, Clone, PartialEq)]
pub struct SvgBarChart {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Left edge of the plot area
    pub plot_left: f64,
    /// Right-aligned anchor of the tick labels
    pub tick_x: f64,
    /// Right edge of the plot area
    pub plot_right: f64,
    /// Baseline of the plot area
    pub plot_bottom: f64,
    /// Baseline of the category labels
    pub label_y: f64,
    /// Value axis grid
    pub ticks: Vec<SvgTick>,
    /// Bars, left to right
    pub bars: Vec<SvgBar>,
}

impl SvgBarChart {
    /// Lay out the comparison bars
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(data: &ChartData) -> Self {
        let frame = Frame {
            height: 240.0,
            bottom_margin: 32.0,
        };
        let plot_width = WIDTH - LEFT - RIGHT;
        let slot = plot_width / data.bars.len().max(1) as f64;
        let bar_width = px(slot * 0.5);

        let bars = data
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let center = LEFT + slot * (i as f64 + 0.5);
                let y = frame.y_for(bar.seconds, &data.axis);
                SvgBar {
                    x: px(center - bar_width / 2.0),
                    y,
                    width: bar_width,
                    height: px(frame.plot_bottom() - y),
                    center: px(center),
                    name: bar.name,
                    formatted: bar.formatted.clone(),
                }
            })
            .collect();

        Self {
            width: WIDTH,
            height: frame.height,
            plot_left: LEFT,
            tick_x: LEFT - 6.0,
            plot_right: WIDTH - RIGHT,
            plot_bottom: frame.plot_bottom(),
            label_y: frame.plot_bottom() + 20.0,
            ticks: frame.ticks(&data.axis),
            bars,
        }
    }
}

/// One marker on the progress line
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDot {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Date label
    pub label: String,
    /// Tooltip text
    pub formatted: String,
}

/// Line chart laid out on a fixed canvas
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLineChart {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Left edge of the plot area
    pub plot_left: f64,
    /// Right-aligned anchor of the tick labels
    pub tick_x: f64,
    /// Right edge of the plot area
    pub plot_right: f64,
    /// Baseline of the plot area
    pub plot_bottom: f64,
    /// Baseline of the rotated date labels
    pub label_y: f64,
    /// Value axis grid
    pub ticks: Vec<SvgTick>,
    /// Markers, oldest first
    pub dots: Vec<SvgDot>,
    /// `x,y` pairs for the `<polyline>` element
    pub points: String,
}

impl SvgLineChart {
    /// Lay out the progress line
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(data: &ChartData) -> Self {
        let frame = Frame {
            height: 300.0,
            bottom_margin: 80.0,
        };
        let plot_width = WIDTH - LEFT - RIGHT;
        let step = plot_width / (data.line.len().saturating_sub(1).max(1)) as f64;

        let dots: Vec<SvgDot> = data
            .line
            .iter()
            .enumerate()
            .map(|(i, p)| SvgDot {
                x: px(LEFT + step * i as f64),
                y: frame.y_for(p.seconds, &data.axis),
                label: p.label.clone(),
                formatted: p.formatted.clone(),
            })
            .collect();

        let points = dots
            .iter()
            .map(|d| format!("{},{}", d.x, d.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            width: WIDTH,
            height: frame.height,
            plot_left: LEFT,
            tick_x: LEFT - 6.0,
            plot_right: WIDTH - RIGHT,
            plot_bottom: frame.plot_bottom(),
            label_y: frame.plot_bottom() + 14.0,
            ticks: frame.ticks(&data.axis),
            dots,
            points,
        }
    }
}
