// File: crates/stream-chart-skia/tests/smoke.rs
// Purpose: End-to-end mount, live update and render through the Skia engine.

use stream_chart::{ChartInput, ChartProps, Rgba, SeriesDescriptor, StreamingChart, Theme};
use stream_chart_skia::SkiaEngine;

fn props() -> ChartProps {
    let mut input = ChartInput::new(1.0);
    input.add_series(
        SeriesDescriptor::new("cpu", Rgba::rgb(64, 160, 255)).with_data(vec![1.0, 3.0, 2.0, 4.5, 3.5, 5.0]),
    );
    input.add_series(
        SeriesDescriptor::new("mem", Rgba::rgb(255, 120, 64)).with_data(vec![200.0, 210.0, 190.0, 230.0, 240.0, 220.0]),
    );
    let mut p = ChartProps::new(4, input);
    p.show_second_axis = true;
    p
}

#[test]
fn render_smoke_png() {
    let mut chart = StreamingChart::mount(SkiaEngine::new(), props(), Theme::dark()).expect("mount");
    chart.on_resize(320.0, 160.0).expect("resize");
    chart.render().expect("render should succeed");
    let png = chart.engine().frame_png().expect("frame kept");
    assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    chart.push_samples(&[4.0, 250.0]).expect("push");
    chart.render().expect("second render");
    assert_eq!(chart.engine().redraws(), 2);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.engine().render_to_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn collapsed_container_draws_nothing() {
    let mut chart = StreamingChart::mount(SkiaEngine::new(), props(), Theme::dark()).expect("mount");
    chart.render().expect("render");
    assert!(chart.engine().frame_png().is_some());
    chart.on_resize(0.0, 0.0).expect("resize");
    chart.render().expect("empty render is fine");
    assert!(chart.engine().frame_png().is_none());
    assert!(chart.engine().render_png_bytes().is_err());
}

#[test]
fn redraw_before_mount_is_an_engine_error() {
    use stream_chart::PlotEngine;
    let mut engine = SkiaEngine::new();
    assert!(matches!(engine.redraw(), Err(stream_chart::ChartError::Engine(_))));
}
