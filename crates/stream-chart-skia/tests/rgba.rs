// File: crates/stream-chart-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use stream_chart::{ChartInput, ChartProps, Rgba, SeriesDescriptor, StreamingChart, Theme};
use stream_chart_skia::{RenderOptions, SkiaEngine};

#[test]
fn render_rgba8_buffer() {
    let mut input = ChartInput::new(1.0);
    input.add_series(SeriesDescriptor::new("a", Rgba::rgb(255, 0, 0)).with_data(vec![0.0, 4.0]));
    let engine = SkiaEngine::with_options(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let theme = Theme::light();
    let mut chart = StreamingChart::mount(engine, ChartProps::new(2, input), theme).expect("mount");
    chart.on_resize(120.0, 80.0).expect("resize");

    let frame = chart.engine().render_rgba8().expect("rgba render");
    assert_eq!((frame.width, frame.height), (120, 80));
    assert_eq!(frame.stride, 120 * 4);
    assert_eq!(frame.pixels.len(), frame.stride * 80);

    // Top-left pixel sits in the inset, so it is pure background
    let bg = theme.background;
    assert_eq!(&frame.pixels[..4], &[bg.r, bg.g, bg.b, 255]);
}
