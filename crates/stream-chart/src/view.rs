// File: crates/stream-chart/src/view.rs
// Live-tail view window: the x range showing the most recent `x_range` samples.

use tracing::trace;

use crate::engine::PlotEngine;
use crate::error::Result;
use crate::scale::X;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub x_min: f64,
    pub x_max: f64,
}

impl ViewWindow {
    /// Window over the last `x_range` of `len` samples: `[len - x_range, len - 1]`.
    /// With fewer samples than `x_range` the window starts before index 0, so the
    /// data fills in from the right edge.
    pub fn tail(len: usize, x_range: usize) -> Self {
        let len = len as f64;
        Self { x_min: len - x_range as f64, x_max: len - 1.0 }
    }

    /// Index range of visible samples, clamped to existing data.
    pub fn visible_indices(&self, len: usize) -> Option<(usize, usize)> {
        if len == 0 || self.x_max < 0.0 {
            return None;
        }
        let lo = self.x_min.max(0.0).ceil() as usize;
        let hi = (self.x_max.floor() as usize).min(len - 1);
        if lo > hi { None } else { Some((lo, hi)) }
    }
}

/// Force the engine's x scale onto the live-tail window, overriding any pan or zoom.
/// Invoked once per data update, before redraw.
pub fn apply_view_window<E: PlotEngine + ?Sized>(engine: &mut E, len: usize, x_range: usize) -> Result<ViewWindow> {
    let window = ViewWindow::tail(len, x_range);
    trace!(x_min = window.x_min, x_max = window.x_max, "applying view window");
    engine.set_scale(X, window.x_min, window.x_max)?;
    Ok(window)
}
