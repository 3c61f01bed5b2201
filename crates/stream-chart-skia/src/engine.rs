// File: crates/stream-chart-skia/src/engine.rs
// Summary: PlotEngine implementation that rasterizes every redraw with Skia and keeps the
// last frame as PNG bytes.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{trace, warn};

use stream_chart::{AlignedData, BBox, ChartError, EngineState, PlotConfig, PlotEngine};

use crate::render::{encode_png, read_rgba8, render_surface, RenderOptions, RgbaFrame};
use crate::text::TextShaper;

pub struct SkiaEngine {
    state: EngineState,
    opts: RenderOptions,
    shaper: TextShaper,
    frame: Option<Vec<u8>>,
    redraws: u64,
}

impl Default for SkiaEngine {
    fn default() -> Self { Self::new() }
}

impl SkiaEngine {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(opts: RenderOptions) -> Self {
        Self { state: EngineState::default(), opts, shaper: TextShaper::new(), frame: None, redraws: 0 }
    }

    pub fn state(&self) -> &EngineState { &self.state }
    pub fn redraws(&self) -> u64 { self.redraws }

    /// PNG of the last successful redraw.
    pub fn frame_png(&self) -> Option<&[u8]> { self.frame.as_deref() }

    /// Render the current state to PNG bytes.
    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = render_surface(&self.state, &self.opts, &self.shaper)?;
        encode_png(&mut surface)
    }

    /// Render the current state to a PNG file, creating parent directories.
    pub fn render_to_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render the current state to unpremultiplied RGBA8.
    pub fn render_rgba8(&self) -> Result<RgbaFrame> {
        let mut surface = render_surface(&self.state, &self.opts, &self.shaper)?;
        read_rgba8(&mut surface)
    }
}

impl PlotEngine for SkiaEngine {
    fn configure(&mut self, config: &PlotConfig) -> stream_chart::Result<()> {
        self.state.configure(config);
        Ok(())
    }

    fn set_data(&mut self, data: AlignedData) -> stream_chart::Result<()> {
        self.state.data = data;
        self.state.refit();
        Ok(())
    }

    fn set_scale(&mut self, key: &str, min: f64, max: f64) -> stream_chart::Result<()> {
        self.state.set_scale(key, min, max)
    }

    fn scale_range(&self, key: &str) -> Option<(f64, f64)> {
        self.state.ranges.get(key).copied()
    }

    fn plot_bbox(&self) -> BBox {
        self.state.bbox()
    }

    fn cursor_index(&self, left: f32) -> Option<usize> {
        self.state.index_at(left)
    }

    fn value_text(&self, series: usize, idx: usize) -> String {
        self.state.value_text(series, idx)
    }

    fn redraw(&mut self) -> stream_chart::Result<()> {
        let config = self.state.config()?;
        if config.width == 0 || config.height == 0 {
            // collapsed container: nothing to draw
            trace!("skipping redraw of empty surface");
            self.frame = None;
            self.redraws += 1;
            return Ok(());
        }
        match self.render_png_bytes() {
            Ok(bytes) => {
                trace!(bytes = bytes.len(), "skia frame rendered");
                self.frame = Some(bytes);
                self.redraws += 1;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "skia redraw failed");
                Err(ChartError::Engine(e.to_string()))
            }
        }
    }
}
