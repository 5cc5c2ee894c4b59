// File: crates/netperf-chart/benches/render_bench.rs
// Summary: Layout and PNG rendering cost for the RTT chart at a few resolutions.

use netperf_chart::{default_series, ChartLayout, ChartRenderer, Dataset, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

const RTT: [&str; 4] = ["RTT_Average(ms)", "RTT_95th_Percentile(ms)", "RTT_Maximum(ms)", "RTT_Minimum(ms)"];

fn bench_layout(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let series = default_series();
    c.bench_function("layout_rtt", |b| {
        b.iter(|| ChartLayout::build("RTT", black_box(&RTT[..]), &dataset, &series))
    });
}

fn bench_render(c: &mut Criterion) {
    let layout = ChartLayout::build("RTT", &RTT, &Dataset::builtin(), &default_series())
        .expect("layout");
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(10);
    for &dpi in &[72.0f32, 150.0, 300.0] {
        let renderer = ChartRenderer::new(RenderOptions { dpi, ..RenderOptions::default() });
        group.bench_function(format!("rtt_{dpi}dpi"), |b| {
            b.iter(|| black_box(renderer.render_to_png_bytes(&layout)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
