use criterion::{Criterion, criterion_group, criterion_main};
use grouped_bar_chart::api::{ChartConfig, ContainerSize, FixedSizeResolver, GroupedBarChart, build_chart_geometry};
use grouped_bar_chart::core::{ChartInput, ColorCycle, LayoutOptions, Period, Point, layout_grouped_bars};
use grouped_bar_chart::render::NullRenderer;
use std::hint::black_box;

fn large_input(periods: usize) -> ChartInput {
    ChartInput::new(
        (0..periods)
            .map(|i| {
                let base = i as f64;
                Period::new(
                    format!("P{i}"),
                    vec![
                        Point::new([base + 1.0, base * 0.5 + 2.0]),
                        Point::new([base * 0.25 + 3.0, base + 4.0]),
                    ],
                )
            })
            .collect(),
    )
}

fn bench_layout_1k_periods(c: &mut Criterion) {
    let input = large_input(1_000);

    c.bench_function("grouped_layout_1k_periods", |b| {
        b.iter(|| {
            let mut colors = ColorCycle::new();
            let _ = layout_grouped_bars(
                black_box(&input),
                black_box(1_920.0),
                black_box(1_000.0),
                LayoutOptions::default(),
                &mut colors,
            );
        })
    });
}

fn bench_chart_geometry_with_trend(c: &mut Criterion) {
    let input = large_input(1_000);
    let config = ChartConfig::default().with_trend_lines(true);
    let surface = ContainerSize::new(1_920.0, 1_080.0);

    c.bench_function("chart_geometry_1k_periods_trend", |b| {
        b.iter(|| {
            let _ = build_chart_geometry(black_box(&input), surface, &config);
        })
    });
}

fn bench_render_pass_null_renderer(c: &mut Criterion) {
    let sizer = FixedSizeResolver::new(1_920.0, 1_080.0);
    let mut chart = GroupedBarChart::new(
        NullRenderer::default(),
        ChartConfig::default().with_trend_lines(true),
    );
    chart.set_data(large_input(250));

    c.bench_function("render_pass_250_periods", |b| {
        b.iter(|| {
            chart.render(black_box(&sizer)).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_1k_periods,
    bench_chart_geometry_with_trend,
    bench_render_pass_null_renderer
);
criterion_main!(benches);
