// File: crates/stream-chart/tests/tooltip_overlay.rs
// Purpose: Validate tooltip lifetime across chart instances sharing one overlay manager.

use stream_chart::types::TOOLTIP_CLASS;
use stream_chart::{
    ChartInput, ChartProps, MemoryEngine, OverlayHost, OverlayManager, PlotEngine, Rgba, SeriesDescriptor,
    StreamingChart, Theme, TooltipState,
};

fn chart(samples: usize) -> StreamingChart<MemoryEngine> {
    let mut input = ChartInput::new(1.0);
    input.add_series(
        SeriesDescriptor::new("req/s", Rgba::rgb(30, 144, 255)).with_data((0..samples).map(|i| (i * 260) as f64).collect()),
    );
    StreamingChart::mount(MemoryEngine::new(), ChartProps::new(10, input), Theme::dark()).unwrap()
}

#[test]
fn cursor_above_plot_leaves_no_tooltip() {
    let mut body = OverlayManager::new();
    let mut c = chart(20);
    c.on_cursor_move(30.0, 40.0, &mut body);
    assert_eq!(body.count_by_class(TOOLTIP_CLASS), 1);
    for top in [0.0, -0.5, -25.0] {
        c.on_cursor_move(30.0, 40.0, &mut body);
        c.on_cursor_move(30.0, top, &mut body);
        assert_eq!(body.count_by_class(TOOLTIP_CLASS), 0, "top = {top}");
        assert_eq!(c.tooltip().state(), TooltipState::Hidden);
    }
}

#[test]
fn remount_keeps_single_tooltip() {
    let mut body = OverlayManager::new();
    let mut first = chart(20);
    first.on_cursor_move(30.0, 40.0, &mut body);
    assert_eq!(body.count_by_class(TOOLTIP_CLASS), 1);

    // new instance mounts while the old tooltip is still on the page
    let mut second = chart(20);
    second.on_cursor_move(50.0, 40.0, &mut body);
    assert_eq!(body.count_by_class(TOOLTIP_CLASS), 1);
    assert!(second.tooltip().is_visible());

    // old instance unmounts; its node is already gone, so nothing else disappears
    first.unmount(&mut body);
    assert_eq!(body.count_by_class(TOOLTIP_CLASS), 1);
}

#[test]
fn tooltip_flips_near_right_edge() {
    let mut body = OverlayManager::new();
    let mut c = chart(20);
    let bbox = c.engine().plot_bbox();

    c.on_cursor_move(5.0, 40.0, &mut body);
    let (_, node) = body.nodes().next().unwrap();
    assert_eq!(node.left, bbox.left + 5.0 + 10.0);
    assert_eq!(node.top, bbox.top + 40.0 - 20.0);

    let edge = bbox.width - 2.0;
    c.on_cursor_move(edge, 40.0, &mut body);
    let (id, node) = body.nodes().next().unwrap();
    let width = body.width(id);
    assert_eq!(node.left, bbox.left + edge - 10.0 - width);
    // vertical position never flips
    assert_eq!(node.top, bbox.top + 40.0 - 20.0);
}

#[test]
fn tooltip_reports_age_and_abbreviated_value() {
    let mut body = OverlayManager::new();
    let mut c = chart(20);
    // far right of the plot is the newest sample
    let width = c.engine().plot_bbox().width;
    c.on_cursor_move(width, 40.0, &mut body);
    let (_, node) = body.nodes().next().unwrap();
    assert!(node.content.html.contains("0 seconds ago"), "{}", node.content.html);
    assert!(node.content.html.contains("req/s: 4.9 k"), "{}", node.content.html);
}
