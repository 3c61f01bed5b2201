// File: crates/stream-chart/src/scale.rs
// Summary: Scale declarations for the plot config and the linear value<->pixel transform
// engines use to honor them.

use serde::{Deserialize, Serialize};

/// Shared x scale (sample index).
pub const X: &str = "x";
/// Primary value scale.
pub const Y: &str = "y";
/// Secondary value scale, present only with a second axis.
pub const Y1: &str = "y1";

/// A named scale in the plot config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub key: String,
    /// Fit the range to visible data on every redraw.
    pub auto: bool,
    /// Explicit `[min, max]`, used when `auto` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
}

impl Scale {
    pub fn auto(key: impl Into<String>) -> Self {
        Self { key: key.into(), auto: true, range: None }
    }

    pub fn manual(key: impl Into<String>) -> Self {
        Self { key: key.into(), auto: false, range: None }
    }
}

/// Linear mapping between a value range and a pixel span.
/// `flip` maps larger values to smaller pixel coordinates (vertical axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
    pub flip: bool,
}

impl LinearScale {
    pub fn horizontal(vmin: f64, vmax: f64, left_px: f32, right_px: f32) -> Self {
        Self::new(vmin, vmax, left_px, right_px, false)
    }

    pub fn vertical(vmin: f64, vmax: f64, top_px: f32, bottom_px: f32) -> Self {
        Self::new(vmin, vmax, top_px, bottom_px, true)
    }

    fn new(vmin: f64, mut vmax: f64, px_start: f32, px_end: f32, flip: bool) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { vmin, vmax, px_start, px_end, flip }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        let frac = ((v - self.vmin) / span) as f32;
        let len = self.px_end - self.px_start;
        if self.flip { self.px_end - frac * len } else { self.px_start + frac * len }
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = (self.px_end - self.px_start).max(1e-6);
        let frac = if self.flip { (self.px_end - px) / len } else { (px - self.px_start) / len };
        self.vmin + frac as f64 * (self.vmax - self.vmin)
    }
}

/// Pad an auto-fitted range so lines do not touch the plot edges.
pub fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < 1e-9 {
        let pad = if min.abs() > 1e-9 { min.abs() * 0.1 } else { 1.0 };
        (min - pad, max + pad)
    } else {
        let pad = span * 0.1;
        (min - pad, max + pad)
    }
}
