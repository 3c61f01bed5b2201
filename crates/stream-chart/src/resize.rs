// File: crates/stream-chart/src/resize.rs
// Summary: Container size tracking fed by host resize notifications.

use crate::geometry::Size;
use crate::types::{HEIGHT, WIDTH};

/// Tracks the wrapping container's size. Reports only real changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeObserver {
    last: Option<Size>,
}

impl ResizeObserver {
    pub fn new() -> Self { Self::default() }

    /// Record a size notification (CSS pixels, possibly fractional). Returns the new
    /// whole-pixel size when it differs from the previous one.
    pub fn observe(&mut self, width: f64, height: f64) -> Option<Size> {
        let size = Size::new(to_px(width), to_px(height));
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(size)
    }

    /// Last observed size, or the defaults before the first notification.
    pub fn size(&self) -> Size {
        self.last.unwrap_or(Size::new(WIDTH, HEIGHT))
    }
}

fn to_px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 { v.round().min(u32::MAX as f64) as u32 } else { 0 }
}
