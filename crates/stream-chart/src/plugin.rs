// File: crates/stream-chart/src/plugin.rs
// Summary: Cursor plugin trait (hook invoked on every cursor move) and the context a plugin
// sees: plot box, datasets, and the engine's value text.

use crate::engine::PlotEngine;
use crate::geometry::BBox;
use crate::overlay::OverlayHost;
use crate::series::SeriesDescriptor;

/// Cursor position in plot-relative pixels plus the data index under it.
/// Engines report a non-positive `top` once the pointer leaves the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorEvent {
    pub left: f32,
    pub top: f32,
    pub idx: Option<usize>,
}

impl CursorEvent {
    pub fn new(left: f32, top: f32, idx: Option<usize>) -> Self {
        Self { left, top, idx }
    }

    /// The event engines emit when the pointer leaves the plot.
    pub fn left_plot() -> Self {
        Self { left: -10.0, top: -10.0, idx: None }
    }

    pub fn is_inside(&self) -> bool {
        self.top > 0.0 && self.idx.is_some()
    }
}

/// What a plugin can read while handling a cursor event.
pub struct HoverContext<'a> {
    /// Plot area in page coordinates.
    pub plot: BBox,
    pub datasets: &'a [SeriesDescriptor],
    pub engine: &'a dyn PlotEngine,
}

impl HoverContext<'_> {
    /// Sample count of the first series.
    pub fn buffer_len(&self) -> usize {
        self.datasets.first().map_or(0, |s| s.data.len())
    }
}

/// Hook run by the chart on cursor events.
pub trait CursorPlugin {
    fn id(&self) -> &'static str;
    fn on_set_cursor(&mut self, evt: &CursorEvent, ctx: &HoverContext<'_>, host: &mut dyn OverlayHost);
    /// Release anything the plugin put on the overlay surface.
    fn destroy(&mut self, _host: &mut dyn OverlayHost) {}
}
