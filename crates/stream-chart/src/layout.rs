// File: crates/stream-chart/src/layout.rs
// Summary: Plot-area layout and auto-scale fitting shared by engine implementations.

use crate::axis::AxisSide;
use crate::geometry::BBox;
use crate::options::PlotConfig;
use crate::scale::{pad_range, X};
use crate::series::AlignedData;
use crate::types::Insets;
use crate::view::ViewWindow;

/// Fallback value range for scales with no visible data.
const EMPTY_RANGE: (f64, f64) = (0.0, 1.0);

/// Plot area inside a `config.width x config.height` container, after insets and
/// axis tracks. `range_of` yields the current range of a scale key.
pub fn plot_bbox<F>(config: &PlotConfig, insets: &Insets, range_of: F) -> BBox
where
    F: Fn(&str) -> (f64, f64),
{
    let mut left = insets.left as f32;
    let mut right = config.width as f32 - insets.right as f32;
    let top = insets.top as f32;
    let mut bottom = config.height as f32 - insets.bottom as f32;

    for axis in config.visible_axes() {
        let (min, max) = range_of(&axis.scale);
        let track = axis.track_size(min, max);
        match axis.side {
            AxisSide::Left => left += track,
            AxisSide::Right => right -= track,
            AxisSide::Bottom => bottom -= track,
        }
    }

    BBox::from_ltwh(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
}

/// Fit every auto scale to the data visible in `window`. Returns `(key, range)` pairs.
pub fn fit_auto_scales(config: &PlotConfig, data: &AlignedData, window: &ViewWindow) -> Vec<(String, (f64, f64))> {
    let visible = window.visible_indices(data.len());
    config
        .scales
        .iter()
        .filter(|s| s.auto && s.key != X)
        .map(|scale| {
            let members: Vec<usize> = config
                .data_series()
                .iter()
                .enumerate()
                .filter(|(_, st)| st.scale == scale.key)
                .map(|(i, _)| i)
                .collect();
            let range = visible
                .and_then(|(lo, hi)| data.range_of(&members, lo, hi))
                .map(|(min, max)| pad_range(min, max))
                .unwrap_or(EMPTY_RANGE);
            (scale.key.clone(), range)
        })
        .collect()
}
