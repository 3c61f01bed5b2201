// File: crates/stream-chart/src/lib.rs
// Summary: Core library entry point; exports the streaming chart component, plot config
// builder, tooltip overlay and engine seam.

pub mod axis;
pub mod chart;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod memo;
pub mod options;
pub mod overlay;
pub mod plugin;
pub mod resize;
pub mod scale;
pub mod series;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use axis::{Axis, AxisSide, AxisSize, TickFormat};
pub use chart::StreamingChart;
pub use engine::{EngineState, MemoryEngine, PlotEngine};
pub use error::{ChartError, Result};
pub use format::abbreviate;
pub use geometry::{BBox, Size};
pub use memo::{ConfigKey, MemoizedConfig};
pub use options::{build_plot_config, BuildInput, PlotConfig, PluginConfig, SeriesStyle};
pub use overlay::{CharWidthMeasure, NodeId, OverlayContent, OverlayHost, OverlayManager, TextMeasure};
pub use plugin::{CursorEvent, CursorPlugin, HoverContext};
pub use resize::ResizeObserver;
pub use series::{AlignedData, ChartInput, ChartProps, DisplayOptions, SeriesDescriptor};
pub use theme::{Rgba, Theme};
pub use tooltip::{tooltip_position, TooltipContent, TooltipPlugin, TooltipState};
pub use view::{apply_view_window, ViewWindow};
