use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lf_quad::{integrate, integrate2d};

fn tent(r: f64) -> f64 {
    if r.abs() <= 0.5 { 1.0 - 2.0 * r.abs() } else { 0.0 }
}

fn bench_integrate_1d(c: &mut Criterion) {
    c.bench_function("tent_self_convolution_1d_lag_0.3", |b| {
        b.iter(|| {
            let e = integrate(
                |z| tent(z) * tent(black_box(0.3) - z),
                -0.5,
                0.5,
                1e-4,
            );
            black_box(e.value);
        });
    });
}

fn bench_integrate_2d(c: &mut Criterion) {
    c.bench_function("tent_self_convolution_2d_lag_0.3", |b| {
        b.iter(|| {
            let lag = black_box(0.3);
            let e = integrate2d(
                |x, y| {
                    tent((x * x + y * y).sqrt()) * tent(((lag - x).powi(2) + y * y).sqrt())
                },
                -0.5,
                0.5,
                -0.5,
                0.5,
                1e-2,
            );
            black_box(e.value);
        });
    });
}

criterion_group!(benches, bench_integrate_1d, bench_integrate_2d);
criterion_main!(benches);
