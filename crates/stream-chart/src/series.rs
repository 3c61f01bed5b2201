// File: crates/stream-chart/src/series.rs
// Summary: Input data model (series descriptors, chart input, display options, props) and
// the column-oriented data layout handed to the plot engine.
// Notes:
// - Field names serialize in camelCase so props can be loaded from the same JSON a
//   web host would pass.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::theme::Rgba;

fn default_point_radius() -> f32 { 2.0 }

/// One tracked metric: ordered samples plus display styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub label: String,
    pub color: Rgba,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default = "default_point_radius")]
    pub point_radius: f32,
}

impl SeriesDescriptor {
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self { label: label.into(), color, data: Vec::new(), point_radius: default_point_radius() }
    }

    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = data;
        self
    }
}

/// Dataset list plus the sampling interval.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    #[serde(default)]
    pub datasets: Vec<SeriesDescriptor>,
    /// Seconds between consecutive samples.
    pub refresh_rate: f64,
}

impl ChartInput {
    pub fn new(refresh_rate: f64) -> Self {
        Self { datasets: Vec::new(), refresh_rate }
    }

    pub fn add_series(&mut self, series: SeriesDescriptor) {
        self.datasets.push(series);
    }

    /// Sample count of the first series; drives the x axis and the tooltip age.
    pub fn buffer_len(&self) -> usize {
        self.datasets.first().map_or(0, |s| s.data.len())
    }

    /// Append one sample per series, in dataset order. Extra values are ignored.
    pub fn push_samples(&mut self, values: &[f64]) {
        for (series, &v) in self.datasets.iter_mut().zip(values) {
            series.data.push(v);
        }
    }

    /// Column-oriented layout `[x, ...series]` keyed on the first series' length.
    pub fn aligned(&self) -> AlignedData {
        let len = self.buffer_len();
        let x = (0..len).map(|i| i as f64).collect();
        let series = self
            .datasets
            .iter()
            .map(|s| (0..len).map(|i| s.data.get(i).copied().filter(|v| v.is_finite())).collect())
            .collect();
        AlignedData { x, series }
    }
}

/// Optional display flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_data_points: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tooltip: Option<bool>,
}

impl DisplayOptions {
    pub fn line_width(&self) -> f32 { self.line_width.unwrap_or(2.0) }
    pub fn show_data_points(&self) -> bool { self.show_data_points.unwrap_or(false) }
    pub fn show_tooltip(&self) -> bool { self.show_tooltip.unwrap_or(true) }
}

/// Everything the host passes to the chart component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    /// Number of most recent samples kept visible.
    pub x_range: usize,
    pub data: ChartInput,
    #[serde(default)]
    pub options: DisplayOptions,
    #[serde(default)]
    pub show_second_axis: bool,
}

impl ChartProps {
    pub fn new(x_range: usize, data: ChartInput) -> Self {
        Self { x_range, data, options: DisplayOptions::default(), show_second_axis: false }
    }

    /// Load props from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let props: Self = serde_json::from_str(json)?;
        props.validate()?;
        Ok(props)
    }

    pub fn validate(&self) -> Result<()> {
        if self.x_range == 0 {
            return Err(ChartError::InvalidXRange);
        }
        let rate = self.data.refresh_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ChartError::InvalidRefreshRate(rate));
        }
        Ok(())
    }
}

/// Column-oriented samples: shared x indices plus one column per series. Series
/// shorter than the first are padded with gaps, longer ones are cut.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignedData {
    pub x: Vec<f64>,
    pub series: Vec<Vec<Option<f64>>>,
}

impl AlignedData {
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Value of data series `series_idx` (0-based, excluding x) at `idx`.
    pub fn value(&self, series_idx: usize, idx: usize) -> Option<f64> {
        self.series.get(series_idx).and_then(|col| col.get(idx).copied().flatten())
    }

    /// Min/max of the given series over `[lo, hi]`, ignoring gaps.
    pub fn range_of(&self, series: &[usize], lo: usize, hi: usize) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &s in series {
            let Some(col) = self.series.get(s) else { continue };
            for v in col.iter().take(hi.saturating_add(1)).skip(lo).flatten() {
                if v.is_finite() {
                    min = min.min(*v);
                    max = max.max(*v);
                }
            }
        }
        if min.is_finite() { Some((min, max)) } else { None }
    }
}
