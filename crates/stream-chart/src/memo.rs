// File: crates/stream-chart/src/memo.rs
// Summary: Explicit "rebuild only when inputs changed" cache for the plot config.

use tracing::debug;

use crate::geometry::Size;
use crate::options::{build_plot_config, BuildInput, PlotConfig};
use crate::series::DisplayOptions;
use crate::theme::Theme;

/// The small derived key that decides whether the plot config is stale.
/// Sample values are deliberately absent: appending data never rebuilds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigKey {
    pub refresh_rate: f64,
    pub dataset_count: usize,
    pub size: Size,
    pub options: DisplayOptions,
    pub show_second_axis: bool,
    pub theme: Theme,
}

impl ConfigKey {
    pub fn of(input: &BuildInput<'_>) -> Self {
        Self {
            refresh_rate: input.refresh_rate,
            dataset_count: input.datasets.len(),
            size: input.size,
            options: input.options,
            show_second_axis: input.show_second_axis,
            theme: *input.theme,
        }
    }
}

/// Holds the last built config and the key it was built from.
#[derive(Debug, Default)]
pub struct MemoizedConfig {
    key: Option<ConfigKey>,
    config: Option<PlotConfig>,
    rebuilds: u64,
}

impl MemoizedConfig {
    pub fn new() -> Self { Self::default() }

    /// Return the config for `input`, rebuilding only when its key changed.
    /// The flag is true when a rebuild happened.
    pub fn get(&mut self, input: &BuildInput<'_>) -> (&PlotConfig, bool) {
        let key = ConfigKey::of(input);
        let stale = self.key.as_ref() != Some(&key) || self.config.is_none();
        if stale {
            debug!(
                datasets = key.dataset_count,
                width = key.size.width,
                height = key.size.height,
                second_axis = key.show_second_axis,
                "rebuilding plot config"
            );
            self.config = Some(build_plot_config(input));
            self.key = Some(key);
            self.rebuilds += 1;
        }
        let config = self.config.get_or_insert_with(|| build_plot_config(input));
        (config, stale)
    }

    pub fn current(&self) -> Option<&PlotConfig> { self.config.as_ref() }

    /// Number of rebuilds so far.
    pub fn rebuilds(&self) -> u64 { self.rebuilds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesDescriptor;
    use crate::theme::{Rgba, Theme};

    fn input<'a>(ds: &'a [SeriesDescriptor], theme: &'a Theme, size: Size) -> BuildInput<'a> {
        BuildInput {
            datasets: ds,
            refresh_rate: 1.0,
            options: DisplayOptions::default(),
            theme,
            size,
            show_second_axis: false,
        }
    }

    #[test]
    fn appending_samples_does_not_rebuild() {
        let theme = Theme::dark();
        let mut ds = vec![SeriesDescriptor::new("a", Rgba::rgb(1, 2, 3)).with_data(vec![1.0])];
        let mut memo = MemoizedConfig::new();
        assert!(memo.get(&input(&ds, &theme, Size::new(100, 50))).1);
        ds[0].data.extend([2.0, 3.0, 4.0]);
        assert!(!memo.get(&input(&ds, &theme, Size::new(100, 50))).1);
        assert_eq!(memo.rebuilds(), 1);
    }

    #[test]
    fn size_and_count_changes_rebuild() {
        let theme = Theme::dark();
        let mut ds = vec![SeriesDescriptor::new("a", Rgba::rgb(1, 2, 3))];
        let mut memo = MemoizedConfig::new();
        memo.get(&input(&ds, &theme, Size::new(100, 50)));
        let (cfg, rebuilt) = memo.get(&input(&ds, &theme, Size::new(120, 50)));
        assert!(rebuilt);
        assert_eq!(cfg.width, 120);
        ds.push(SeriesDescriptor::new("b", Rgba::rgb(3, 2, 1)));
        assert!(memo.get(&input(&ds, &theme, Size::new(120, 50))).1);
        assert_eq!(memo.rebuilds(), 3);
    }

    #[test]
    fn option_and_theme_changes_rebuild() {
        let dark = Theme::dark();
        let light = Theme::light();
        let ds = vec![SeriesDescriptor::new("a", Rgba::rgb(1, 2, 3))];
        let mut memo = MemoizedConfig::new();
        memo.get(&input(&ds, &dark, Size::new(10, 10)));
        let mut with_points = input(&ds, &dark, Size::new(10, 10));
        with_points.options.show_data_points = Some(true);
        assert!(memo.get(&with_points).1);
        assert!(memo.get(&input(&ds, &light, Size::new(10, 10))).1);
        assert!(!memo.get(&input(&ds, &light, Size::new(10, 10))).1);
    }

    #[test]
    fn recolored_theme_with_same_name_rebuilds() {
        let dark = Theme::dark();
        let custom = Theme { text: Rgba::rgb(255, 0, 0), border: Rgba::rgb(0, 255, 0), ..Theme::dark() };
        let ds = vec![SeriesDescriptor::new("a", Rgba::rgb(1, 2, 3))];
        let mut memo = MemoizedConfig::new();
        memo.get(&input(&ds, &dark, Size::new(10, 10)));
        let (cfg, rebuilt) = memo.get(&input(&ds, &custom, Size::new(10, 10)));
        assert!(rebuilt);
        let y = cfg.axes.iter().find(|a| a.scale == "y").unwrap();
        assert_eq!(y.stroke, Rgba::rgb(255, 0, 0));
        assert_eq!(y.ticks.stroke, Rgba::rgb(0, 255, 0));
    }
}
