// File: crates/stream-chart/src/types.rs
// Summary: Shared constants (default sizes, tooltip offsets, axis sizing) and insets.

/// Default container width in pixels, used until the first resize observation.
pub const WIDTH: u32 = 800;
/// Default container height in pixels.
pub const HEIGHT: u32 = 300;

/// Horizontal gap between cursor and tooltip, in pixels.
pub const TOOLTIP_OFFSET_X: f32 = 10.0;
/// Vertical lift of the tooltip above the cursor, in pixels.
pub const TOOLTIP_OFFSET_Y: f32 = 20.0;

/// Pixels reserved per character of the widest tick label.
pub const AXIS_PX_PER_CHAR: f32 = 12.0;
/// Axis track never shrinks below this many pixels.
pub const AXIS_MIN_SIZE: f32 = 40.0;

/// CSS class of the floating tooltip node.
pub const TOOLTIP_CLASS: &str = "uplot-tooltip";
/// CSS class of one series row inside the tooltip.
pub const TOOLTIP_LABEL_CLASS: &str = "uplot-tooltip-label";

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(8, 8, 8, 8)
    }
}
