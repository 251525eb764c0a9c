use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rlc_envelope::prelude::*;

fn reference() -> (DampedOscillator, TimeGrid) {
    let osc = DampedOscillator::new(OscillatorParams::default()).expect("valid params");
    let grid = osc
        .time_grid(DEFAULT_SPAN_DECAY_TIMES, DEFAULT_SAMPLE_COUNT)
        .expect("valid grid");
    (osc, grid)
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_response");
    let (osc, grid) = reference();

    group.bench_function(BenchmarkId::new("sample_waveforms", grid.len()), |b| {
        b.iter(|| Waveforms::sample(&osc, &grid))
    });

    group.bench_function(BenchmarkId::new("render_svg_string", grid.len()), |b| {
        b.iter_batched(
            || Waveforms::sample(&osc, &grid),
            |w| {
                let _ = render_svg_string(&w, &PlotStyle::default());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
