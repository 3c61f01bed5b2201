// File: crates/stream-chart-skia/src/lib.rs
// Summary: Skia engine crate: CPU raster rendering of the streaming chart, PNG/RGBA output
// and font-backed text measurement.

pub mod engine;
pub mod render;
pub mod text;

pub use engine::SkiaEngine;
pub use render::{RenderOptions, RgbaFrame};
pub use text::{SkiaTextMeasure, TextShaper};
