// File: crates/stream-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot bounding box, container size).

use serde::{Deserialize, Serialize};

/// Axis-aligned box in CSS pixels, page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BBox {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }

    /// Translate by an offset, e.g. from container-relative to page coordinates.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self { left: self.left + dx, top: self.top + dy, ..*self }
    }
}

/// Whole-pixel container size as reported by the resize observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
}
