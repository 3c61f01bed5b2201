// File: crates/stream-chart/src/options.rs
// Summary: Plot configuration model and the builder deriving it from data shape, display
// options, theme and container size.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisSide, TickFormat};
use crate::geometry::Size;
use crate::scale::{Scale, X, Y, Y1};
use crate::series::{DisplayOptions, SeriesDescriptor};
use crate::theme::{Rgba, Theme};

/// Alpha applied to a series color for its area fill.
const AREA_FILL_ALPHA: u8 = 26;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub show: bool,
    /// Diameter in pixels.
    pub size: f32,
}

/// Per-series styling. Entry 0 of [`PlotConfig::series`] is the x series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub scale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
    pub width: f32,
    pub points: PointStyle,
}

impl SeriesStyle {
    fn x() -> Self {
        Self {
            label: X.to_string(),
            scale: X.to_string(),
            stroke: None,
            fill: None,
            width: 0.0,
            points: PointStyle { show: false, size: 0.0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragConfig {
    pub x: bool,
    pub y: bool,
    pub set_scale: bool,
}

/// Which cursor guides track the pointer and whether dragging zooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorConfig {
    pub x: bool,
    pub y: bool,
    pub drag: DragConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        // Horizontal hover only; no vertical guide, no drag-to-zoom.
        Self { x: true, y: false, drag: DragConfig { x: false, y: false, set_scale: false } }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub show: bool,
}

/// Plugins registered on the plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PluginConfig {
    /// Cursor-following value readout.
    #[serde(rename_all = "camelCase")]
    Tooltip { refresh_rate: f64 },
}

/// Configuration handed to the plot engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub series: Vec<SeriesStyle>,
    pub axes: Vec<Axis>,
    pub scales: Vec<Scale>,
    pub cursor: CursorConfig,
    pub legend: LegendConfig,
    pub plugins: Vec<PluginConfig>,
}

impl PlotConfig {
    pub fn scale(&self, key: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.key == key)
    }

    /// Styles of the data series (everything after the x series).
    pub fn data_series(&self) -> &[SeriesStyle] {
        self.series.get(1..).unwrap_or(&[])
    }

    pub fn visible_axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter().filter(|a| a.show)
    }

    pub fn has_tooltip(&self) -> bool {
        self.plugins.iter().any(|p| matches!(p, PluginConfig::Tooltip { .. }))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Inputs of [`build_plot_config`].
#[derive(Clone, Copy, Debug)]
pub struct BuildInput<'a> {
    pub datasets: &'a [SeriesDescriptor],
    pub refresh_rate: f64,
    pub options: DisplayOptions,
    pub theme: &'a Theme,
    pub size: Size,
    pub show_second_axis: bool,
}

/// Scale a dataset is drawn against: only index 1 moves to `y1`, and only with a second axis.
pub fn scale_for(index: usize, show_second_axis: bool) -> &'static str {
    if show_second_axis && index == 1 { Y1 } else { Y }
}

pub fn build_plot_config(input: &BuildInput<'_>) -> PlotConfig {
    let theme = input.theme;
    let opts = input.options;

    let mut series = Vec::with_capacity(input.datasets.len() + 1);
    series.push(SeriesStyle::x());
    for (i, ds) in input.datasets.iter().enumerate() {
        series.push(SeriesStyle {
            label: ds.label.clone(),
            scale: scale_for(i, input.show_second_axis).to_string(),
            stroke: Some(ds.color),
            fill: Some(ds.color.with_alpha(AREA_FILL_ALPHA)),
            width: opts.line_width(),
            points: PointStyle { show: opts.show_data_points(), size: ds.point_radius * 2.0 },
        });
    }

    let mut x_axis = Axis::new(X, AxisSide::Bottom, theme.text, theme.border).hidden();
    x_axis.format = TickFormat::Plain;
    let mut y_axis = Axis::new(Y, AxisSide::Left, theme.text, theme.border);
    y_axis.grid.stroke = theme.grid;
    let mut axes = vec![x_axis, y_axis];
    let mut scales = vec![Scale::manual(X), Scale::auto(Y)];
    if input.show_second_axis {
        axes.push(Axis::new(Y1, AxisSide::Right, theme.text, theme.border).without_grid());
        scales.push(Scale::auto(Y1));
    }

    let plugins = if opts.show_tooltip() {
        vec![PluginConfig::Tooltip { refresh_rate: input.refresh_rate }]
    } else {
        Vec::new()
    };

    PlotConfig {
        width: input.size.width,
        height: input.size.height,
        background: theme.background,
        series,
        axes,
        scales,
        cursor: CursorConfig::default(),
        legend: LegendConfig { show: false },
        plugins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datasets(n: usize) -> Vec<SeriesDescriptor> {
        (0..n)
            .map(|i| SeriesDescriptor::new(format!("s{i}"), Rgba::rgb(10 * i as u8, 0, 0)).with_data(vec![1.0, 2.0]))
            .collect()
    }

    fn build(n: usize, second: bool, options: DisplayOptions) -> PlotConfig {
        let ds = datasets(n);
        let theme = Theme::dark();
        build_plot_config(&BuildInput {
            datasets: &ds,
            refresh_rate: 1.0,
            options,
            theme: &theme,
            size: Size::new(640, 240),
            show_second_axis: second,
        })
    }

    fn visible_value_axes(cfg: &PlotConfig) -> Vec<&str> {
        cfg.visible_axes().filter(|a| a.scale != X).map(|a| a.scale.as_str()).collect()
    }

    #[test]
    fn single_value_axis_without_second_axis() {
        for n in [0, 1, 2, 5] {
            let cfg = build(n, false, DisplayOptions::default());
            assert_eq!(visible_value_axes(&cfg), vec![Y]);
            assert!(cfg.scale(Y1).is_none());
            assert!(cfg.data_series().iter().all(|s| s.scale == Y));
        }
    }

    #[test]
    fn second_dataset_routed_to_y1() {
        let cfg = build(4, true, DisplayOptions::default());
        assert_eq!(visible_value_axes(&cfg), vec![Y, Y1]);
        let scales: Vec<&str> = cfg.data_series().iter().map(|s| s.scale.as_str()).collect();
        assert_eq!(scales, vec![Y, Y1, Y, Y]);
        assert!(cfg.scale(Y1).unwrap().auto);
    }

    #[test]
    fn x_series_leads_and_x_scale_is_manual() {
        let cfg = build(2, false, DisplayOptions::default());
        assert_eq!(cfg.series.len(), 3);
        assert_eq!(cfg.series[0].label, X);
        assert!(!cfg.scale(X).unwrap().auto);
    }

    #[test]
    fn display_options_flow_into_series() {
        let opts = DisplayOptions { line_width: Some(3.5), show_data_points: Some(true), show_tooltip: Some(false) };
        let cfg = build(1, false, opts);
        let s = &cfg.data_series()[0];
        assert_eq!(s.width, 3.5);
        assert!(s.points.show);
        assert_eq!(s.points.size, 4.0);
        assert!(!cfg.has_tooltip());
    }

    #[test]
    fn cursor_is_horizontal_only() {
        let cfg = build(1, false, DisplayOptions::default());
        assert!(cfg.cursor.x);
        assert!(!cfg.cursor.y);
        assert!(!cfg.cursor.drag.x && !cfg.cursor.drag.y && !cfg.cursor.drag.set_scale);
        assert!(cfg.has_tooltip());
        assert!(!cfg.legend.show);
    }

    #[test]
    fn axes_use_theme_colors() {
        let cfg = build(1, true, DisplayOptions::default());
        let theme = Theme::dark();
        for axis in cfg.axes.iter() {
            assert_eq!(axis.stroke, theme.text);
            assert_eq!(axis.ticks.stroke, theme.border);
        }
    }

    #[test]
    fn identical_inputs_identical_config() {
        assert_eq!(build(3, true, DisplayOptions::default()), build(3, true, DisplayOptions::default()));
    }

    #[test]
    fn config_serializes_to_json() {
        let json = build(2, true, DisplayOptions::default()).to_json().unwrap();
        assert!(json.contains("\"y1\""));
        assert!(json.contains("\"kind\": \"tooltip\""));
        assert!(json.contains("\"refreshRate\": 1.0"));
    }
}
