use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use stream_chart::{
    build_plot_config, BuildInput, ChartInput, ChartProps, DisplayOptions, MemoryEngine, Rgba, SeriesDescriptor,
    Size, StreamingChart, Theme,
};

fn gen_input(series: usize, n: usize) -> ChartInput {
    let mut input = ChartInput::new(1.0);
    for s in 0..series {
        let data = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + s as f64).collect();
        input.add_series(SeriesDescriptor::new(format!("s{s}"), Rgba::rgb(20, 120, 200)).with_data(data));
    }
    input
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plot_config");
    let theme = Theme::dark();
    for &series in &[1usize, 4, 16] {
        let input = gen_input(series, 16);
        group.bench_with_input(BenchmarkId::from_parameter(series), &series, |b, _| {
            b.iter(|| {
                black_box(build_plot_config(&BuildInput {
                    datasets: &input.datasets,
                    refresh_rate: input.refresh_rate,
                    options: DisplayOptions::default(),
                    theme: &theme,
                    size: Size::new(800, 300),
                    show_second_axis: true,
                }))
            });
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_samples");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("n{n}"), |b| {
            let props = ChartProps::new(300, gen_input(3, n));
            let mut chart = StreamingChart::mount(MemoryEngine::new(), props, Theme::dark()).expect("mount");
            b.iter(|| {
                chart.push_samples(black_box(&[1.0, 2.0, 3.0])).expect("push");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_stream);
criterion_main!(benches);
