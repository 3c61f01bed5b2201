// File: crates/stream-chart-skia/src/render.rs
// Summary: Headless drawing of a configured plot (background, grid, series, axes) onto a
// Skia CPU raster surface.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

use stream_chart::axis::{Axis, AxisSide};
use stream_chart::options::SeriesStyle;
use stream_chart::scale::LinearScale;
use stream_chart::{BBox, EngineState, Rgba, ViewWindow};

use crate::text::TextShaper;

/// Length of an axis tick mark in pixels.
const TICK_LEN: f32 = 4.0;

pub struct RenderOptions {
    /// Draw tick labels. Off in golden tests since font rasterization varies by platform.
    pub draw_labels: bool,
    pub label_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, label_size: 12.0 }
    }
}

pub fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn rect(b: &BBox) -> skia::Rect {
    skia::Rect::from_xywh(b.left, b.top, b.width, b.height)
}

fn range_of(state: &EngineState, key: &str) -> (f64, f64) {
    state.ranges.get(key).copied().unwrap_or((0.0, 1.0))
}

/// Paint the whole plot into a fresh raster surface sized by the config.
pub fn render_surface(state: &EngineState, opts: &RenderOptions, shaper: &TextShaper) -> Result<skia::Surface> {
    let config = state.config()?;
    if config.width == 0 || config.height == 0 {
        bail!("cannot render a {}x{} surface", config.width, config.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((config.width as i32, config.height as i32))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(color(config.background));

    let bbox = state.bbox();
    let window = state.x_window();

    for axis in config.visible_axes() {
        draw_grid(canvas, axis, range_of(state, &axis.scale), &bbox, &window);
    }

    canvas.save();
    canvas.clip_rect(rect(&bbox), skia::ClipOp::Intersect, true);
    for (i, style) in config.data_series().iter().enumerate() {
        draw_series(canvas, state, i, style, &bbox, &window);
    }
    canvas.restore();

    for axis in config.visible_axes() {
        draw_axis(canvas, axis, range_of(state, &axis.scale), &bbox, opts, shaper);
    }

    Ok(surface)
}

/// Encode a rendered surface as PNG.
pub fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA8 pixels of a rendered frame.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub width: u32,
    pub height: u32,
    /// Bytes per row.
    pub stride: usize,
    pub pixels: Vec<u8>,
}

pub fn read_rgba8(surface: &mut skia::Surface) -> Result<RgbaFrame> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        bail!("reading {w}x{h} pixels back failed");
    }
    Ok(RgbaFrame { width: w as u32, height: h as u32, stride, pixels })
}

fn line_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, axis: &Axis, (min, max): (f64, f64), b: &BBox, window: &ViewWindow) {
    if !axis.grid.show {
        return;
    }
    let paint = line_paint(axis.grid.stroke, axis.grid.width);
    match axis.side {
        AxisSide::Left | AxisSide::Right => {
            let sy = LinearScale::vertical(min, max, b.top, b.bottom());
            for v in axis.tick_values(min, max) {
                let y = sy.to_px(v);
                canvas.draw_line((b.left, y), (b.right(), y), &paint);
            }
        }
        AxisSide::Bottom => {
            let sx = LinearScale::horizontal(window.x_min, window.x_max, b.left, b.right());
            for v in axis.tick_values(window.x_min, window.x_max) {
                let x = sx.to_px(v);
                canvas.draw_line((x, b.top), (x, b.bottom()), &paint);
            }
        }
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, (min, max): (f64, f64), b: &BBox, opts: &RenderOptions, shaper: &TextShaper) {
    let ticks = axis.tick_values(min, max);
    let labels = axis.format_ticks(&ticks);
    let tick_paint = line_paint(axis.ticks.stroke, axis.ticks.width);
    let label_color = color(axis.stroke);
    let half = opts.label_size * 0.35;

    match axis.side {
        AxisSide::Left | AxisSide::Right => {
            let sy = LinearScale::vertical(min, max, b.top, b.bottom());
            let (edge, dir) = if axis.side == AxisSide::Left { (b.left, -1.0) } else { (b.right(), 1.0) };
            if axis.ticks.show {
                canvas.draw_line((edge, b.top), (edge, b.bottom()), &tick_paint);
            }
            for (v, label) in ticks.iter().zip(&labels) {
                let y = sy.to_px(*v);
                if axis.ticks.show {
                    canvas.draw_line((edge, y), (edge + dir * TICK_LEN, y), &tick_paint);
                }
                if !opts.draw_labels {
                    continue;
                }
                let x = edge + dir * (TICK_LEN + 4.0);
                if dir < 0.0 {
                    shaper.draw_right(canvas, label, x, y + half, opts.label_size, label_color, true);
                } else {
                    shaper.draw_left(canvas, label, x, y + half, opts.label_size, label_color, true);
                }
            }
        }
        AxisSide::Bottom => {
            let sx = LinearScale::horizontal(min, max, b.left, b.right());
            if axis.ticks.show {
                canvas.draw_line((b.left, b.bottom()), (b.right(), b.bottom()), &tick_paint);
            }
            for (v, label) in ticks.iter().zip(&labels) {
                let x = sx.to_px(*v);
                if axis.ticks.show {
                    canvas.draw_line((x, b.bottom()), (x, b.bottom() + TICK_LEN), &tick_paint);
                }
                if opts.draw_labels {
                    let w = shaper.measure_width(label, opts.label_size, true);
                    let y = b.bottom() + TICK_LEN + opts.label_size + 2.0;
                    shaper.draw_left(canvas, label, x - w / 2.0, y, opts.label_size, label_color, true);
                }
            }
        }
    }
}

/// Runs of consecutive present samples in `[lo, hi]`, as pixel points.
fn segments(values: &[Option<f64>], lo: usize, hi: usize, sx: &LinearScale, sy: &LinearScale) -> Vec<Vec<(f32, f32)>> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for idx in lo..=hi {
        match values.get(idx).copied().flatten() {
            Some(v) if v.is_finite() => run.push((sx.to_px(idx as f64), sy.to_px(v))),
            _ => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

fn draw_series(canvas: &skia::Canvas, state: &EngineState, i: usize, style: &SeriesStyle, b: &BBox, window: &ViewWindow) {
    let Some(values) = state.data.series.get(i) else { return };
    let len = state.data.len();
    let Some((lo, hi)) = window.visible_indices(len) else { return };
    // one sample past each edge so lines run to the clip
    let (lo, hi) = (lo.saturating_sub(1), (hi + 1).min(len - 1));

    let sx = LinearScale::horizontal(window.x_min, window.x_max, b.left, b.right());
    let (min, max) = range_of(state, &style.scale);
    let sy = LinearScale::vertical(min, max, b.top, b.bottom());

    for run in segments(values, lo, hi, &sx, &sy) {
        if let Some(fill) = style.fill {
            if run.len() >= 2 {
                let mut area = skia::Path::new();
                area.move_to((run[0].0, b.bottom()));
                for &p in &run {
                    area.line_to(p);
                }
                area.line_to((run[run.len() - 1].0, b.bottom()));
                area.close();
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(color(fill));
                canvas.draw_path(&area, &paint);
            }
        }

        if let Some(stroke) = style.stroke {
            if run.len() >= 2 && style.width > 0.0 {
                let mut path = skia::Path::new();
                path.move_to(run[0]);
                for &p in run.iter().skip(1) {
                    path.line_to(p);
                }
                canvas.draw_path(&path, &line_paint(stroke, style.width));
            }
            if style.points.show {
                let mut dot = skia::Paint::default();
                dot.set_anti_alias(true);
                dot.set_color(color(stroke));
                for &p in &run {
                    canvas.draw_circle(p, style.points.size / 2.0, &dot);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_split_segments() {
        let sx = LinearScale::horizontal(0.0, 5.0, 0.0, 50.0);
        let sy = LinearScale::vertical(0.0, 10.0, 0.0, 100.0);
        let values = vec![Some(1.0), Some(2.0), None, Some(4.0), Some(f64::NAN), Some(6.0)];
        let runs = segments(&values, 0, 5, &sx, &sy);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[0][0], (0.0, 90.0));
        assert_eq!(runs[2], vec![(50.0, 40.0)]);
    }

    #[test]
    fn color_keeps_alpha() {
        let c = color(Rgba::rgb(10, 20, 30).with_alpha(26));
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (26, 10, 20, 30));
    }
}
