// File: crates/stream-chart/src/axis.rs
// Summary: Axis model: placement, colors, tick label formatting and track sizing.

use serde::{Deserialize, Serialize};

use crate::format::abbreviate;
use crate::theme::Rgba;
use crate::types::{AXIS_MIN_SIZE, AXIS_PX_PER_CHAR};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Bottom,
    Left,
    Right,
}

/// How tick values become labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    /// Plain `Display` of the value.
    Plain,
    /// Magnitude suffixes, see [`abbreviate`].
    Abbreviated,
}

impl TickFormat {
    pub fn apply(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => value.to_string(),
            TickFormat::Abbreviated => abbreviate(value),
        }
    }
}

/// How wide (left/right axes) or tall (bottom axes) the axis track is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum AxisSize {
    Fixed { px: f32 },
    /// `px_per_char` per character of the last tick label, never below `min`.
    LastTickLabel { px_per_char: f32, min: f32 },
}

impl AxisSize {
    pub fn resolve(&self, labels: &[String]) -> f32 {
        match *self {
            AxisSize::Fixed { px } => px,
            AxisSize::LastTickLabel { px_per_char, min } => {
                let chars = labels.last().map_or(0, |l| l.chars().count());
                (chars as f32 * px_per_char).max(min)
            }
        }
    }
}

impl Default for AxisSize {
    fn default() -> Self {
        AxisSize::LastTickLabel { px_per_char: AXIS_PX_PER_CHAR, min: AXIS_MIN_SIZE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub show: bool,
    pub stroke: Rgba,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Key of the scale this axis reads.
    pub scale: String,
    pub side: AxisSide,
    pub show: bool,
    /// Tick label color.
    pub stroke: Rgba,
    pub grid: LineStyle,
    pub ticks: LineStyle,
    pub format: TickFormat,
    pub size: AxisSize,
    /// Approximate number of ticks between the scale bounds (inclusive).
    pub tick_count: usize,
}

impl Axis {
    pub fn new(scale: impl Into<String>, side: AxisSide, label: Rgba, line: Rgba) -> Self {
        Self {
            scale: scale.into(),
            side,
            show: true,
            stroke: label,
            grid: LineStyle { show: true, stroke: line, width: 1.0 },
            ticks: LineStyle { show: true, stroke: line, width: 1.0 },
            format: TickFormat::Abbreviated,
            size: AxisSize::default(),
            tick_count: 5,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.show = false;
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.grid.show = false;
        self
    }

    /// Tick values on a 1/2/5 x 10^k step inside `[min, max]`, aiming for `tick_count` ticks.
    pub fn tick_values(&self, min: f64, max: f64) -> Vec<f64> {
        if !(min.is_finite() && max.is_finite()) || max <= min {
            return vec![min, max];
        }
        let step = nice_step((max - min) / (self.tick_count.max(2) - 1) as f64);
        let scale = 10f64.powi((-step.log10().floor()).max(0.0) as i32);
        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        let ticks: Vec<f64> = (first..=last)
            // round off accumulated float error, and fold -0 into 0
            .map(|k| (k as f64 * step * scale).round() / scale + 0.0)
            .collect();
        if ticks.is_empty() { vec![min, max] } else { ticks }
    }

    pub fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|&v| self.format.apply(v)).collect()
    }

    /// Track size for the labels of `[min, max]`; zero when hidden.
    pub fn track_size(&self, min: f64, max: f64) -> f32 {
        if !self.show {
            return 0.0;
        }
        let labels = self.format_ticks(&self.tick_values(min, max));
        self.size.resolve(&labels)
    }
}

fn nice_step(raw: f64) -> f64 {
    const EPS: f64 = 1e-9;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let nice = if norm <= 1.5 + EPS {
        1.0
    } else if norm <= 3.0 + EPS {
        2.0
    } else if norm <= 7.0 + EPS {
        5.0
    } else {
        10.0
    };
    nice * mag
}
