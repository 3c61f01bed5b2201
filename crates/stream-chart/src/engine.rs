// File: crates/stream-chart/src/engine.rs
// Summary: Plot engine seam (configuration in, scales/hit-testing out) and a headless
// in-memory engine.

use std::collections::HashMap;

use crate::error::{ChartError, Result};
use crate::format::group_thousands;
use crate::geometry::BBox;
use crate::layout::{fit_auto_scales, plot_bbox};
use crate::options::PlotConfig;
use crate::scale::{LinearScale, X};
use crate::series::AlignedData;
use crate::types::Insets;
use crate::view::ViewWindow;

/// What the chart component needs from a plotting engine.
pub trait PlotEngine {
    /// Replace the whole configuration (series, axes, scales, size).
    fn configure(&mut self, config: &PlotConfig) -> Result<()>;
    /// Replace the column-oriented data.
    fn set_data(&mut self, data: AlignedData) -> Result<()>;
    /// Pin a scale to `[min, max]`.
    fn set_scale(&mut self, key: &str, min: f64, max: f64) -> Result<()>;
    fn scale_range(&self, key: &str) -> Option<(f64, f64)>;
    /// Plot area relative to the container.
    fn plot_bbox(&self) -> BBox;
    /// Data index under a cursor `left` offset (plot-relative pixels).
    fn cursor_index(&self, left: f32) -> Option<usize>;
    /// Display text of data series `series` (0-based, excluding x) at `idx`.
    fn value_text(&self, series: usize, idx: usize) -> String;
    fn redraw(&mut self) -> Result<()>;
}

/// Shared state every engine keeps: config, data, and resolved scale ranges.
#[derive(Clone, Debug, Default)]
pub struct EngineState {
    pub config: Option<PlotConfig>,
    pub data: AlignedData,
    pub ranges: HashMap<String, (f64, f64)>,
    pub insets: Insets,
}

impl EngineState {
    pub fn config(&self) -> Result<&PlotConfig> {
        self.config.as_ref().ok_or_else(|| ChartError::Engine("engine used before configure".into()))
    }

    pub fn x_window(&self) -> ViewWindow {
        let (x_min, x_max) = self
            .ranges
            .get(X)
            .copied()
            .unwrap_or((0.0, self.data.len().saturating_sub(1) as f64));
        ViewWindow { x_min, x_max }
    }

    /// Re-fit auto scales to the data inside the current x window.
    pub fn refit(&mut self) {
        let Some(config) = self.config.as_ref() else { return };
        let window = self.x_window();
        for (key, range) in fit_auto_scales(config, &self.data, &window) {
            self.ranges.insert(key, range);
        }
    }

    pub fn bbox(&self) -> BBox {
        let Some(config) = self.config.as_ref() else { return BBox::default() };
        plot_bbox(config, &self.insets, |key| self.ranges.get(key).copied().unwrap_or((0.0, 1.0)))
    }

    /// Nearest visible sample to a plot-relative x offset.
    pub fn index_at(&self, left: f32) -> Option<usize> {
        let bbox = self.bbox();
        if left < 0.0 || left > bbox.width {
            return None;
        }
        let window = self.x_window();
        let (lo, hi) = window.visible_indices(self.data.len())?;
        let scale = LinearScale::horizontal(window.x_min, window.x_max, 0.0, bbox.width);
        let idx = scale.from_px(left).round();
        Some((idx.max(lo as f64) as usize).min(hi))
    }

    pub fn configure(&mut self, config: &PlotConfig) {
        let x_range = self.ranges.get(X).copied();
        self.config = Some(config.clone());
        self.ranges.clear();
        if let Some(r) = x_range {
            self.ranges.insert(X.to_string(), r);
        }
        self.refit();
    }

    pub fn set_scale(&mut self, key: &str, min: f64, max: f64) -> Result<()> {
        let config = self.config()?;
        if config.scale(key).is_none() {
            return Err(ChartError::Engine(format!("unknown scale '{key}'")));
        }
        self.ranges.insert(key.to_string(), (min, max));
        if key == X {
            self.refit();
        }
        Ok(())
    }

    pub fn value_text(&self, series: usize, idx: usize) -> String {
        self.data.value(series, idx).map_or_else(|| "--".to_string(), group_thousands)
    }
}

/// Engine without any drawing; tracks scales and answers hit-tests. Useful for tests
/// and hosts that render elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemoryEngine {
    state: EngineState,
    redraws: u64,
}

impl MemoryEngine {
    pub fn new() -> Self { Self::default() }

    pub fn redraws(&self) -> u64 { self.redraws }
    pub fn config(&self) -> Option<&PlotConfig> { self.state.config.as_ref() }
    pub fn data(&self) -> &AlignedData { &self.state.data }
}

impl PlotEngine for MemoryEngine {
    fn configure(&mut self, config: &PlotConfig) -> Result<()> {
        self.state.configure(config);
        Ok(())
    }

    fn set_data(&mut self, data: AlignedData) -> Result<()> {
        self.state.data = data;
        self.state.refit();
        Ok(())
    }

    fn set_scale(&mut self, key: &str, min: f64, max: f64) -> Result<()> {
        self.state.set_scale(key, min, max)
    }

    fn scale_range(&self, key: &str) -> Option<(f64, f64)> {
        self.state.ranges.get(key).copied()
    }

    fn plot_bbox(&self) -> BBox {
        self.state.bbox()
    }

    fn cursor_index(&self, left: f32) -> Option<usize> {
        self.state.index_at(left)
    }

    fn value_text(&self, series: usize, idx: usize) -> String {
        self.state.value_text(series, idx)
    }

    fn redraw(&mut self) -> Result<()> {
        self.state.config()?;
        self.redraws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::options::{build_plot_config, BuildInput};
    use crate::series::{ChartInput, DisplayOptions, SeriesDescriptor};
    use crate::theme::{Rgba, Theme};

    fn setup(samples: usize) -> (MemoryEngine, ChartInput) {
        let mut input = ChartInput::new(1.0);
        let data = (0..samples).map(|i| (i * 1000) as f64).collect();
        input.add_series(SeriesDescriptor::new("a", Rgba::rgb(9, 9, 9)).with_data(data));
        let cfg = build_plot_config(&BuildInput {
            datasets: &input.datasets,
            refresh_rate: 1.0,
            options: DisplayOptions::default(),
            theme: &Theme::dark(),
            size: Size::new(200, 100),
            show_second_axis: false,
        });
        let mut engine = MemoryEngine::new();
        engine.configure(&cfg).unwrap();
        engine.set_data(input.aligned()).unwrap();
        (engine, input)
    }

    #[test]
    fn unknown_scale_is_rejected() {
        let (mut engine, _) = setup(3);
        assert!(matches!(engine.set_scale("z", 0.0, 1.0), Err(ChartError::Engine(_))));
    }

    #[test]
    fn redraw_requires_configure() {
        let mut engine = MemoryEngine::new();
        assert!(engine.redraw().is_err());
    }

    #[test]
    fn cursor_index_maps_into_window() {
        let (mut engine, _) = setup(20);
        engine.set_scale(X, 10.0, 19.0).unwrap();
        let width = engine.plot_bbox().width;
        assert_eq!(engine.cursor_index(0.0), Some(10));
        assert_eq!(engine.cursor_index(width), Some(19));
        assert_eq!(engine.cursor_index(-1.0), None);
        assert_eq!(engine.cursor_index(width + 1.0), None);
    }

    #[test]
    fn value_text_is_grouped() {
        let (engine, _) = setup(3);
        assert_eq!(engine.value_text(0, 2), "2,000");
        assert_eq!(engine.value_text(0, 7), "--");
    }

    #[test]
    fn setting_x_refits_value_scale() {
        let (mut engine, _) = setup(10);
        engine.set_scale(X, 8.0, 9.0).unwrap();
        let (min, max) = engine.scale_range("y").unwrap();
        assert!(min < 8000.0 && min > 7000.0);
        assert!(max > 9000.0 && max < 10000.0);
    }
}
