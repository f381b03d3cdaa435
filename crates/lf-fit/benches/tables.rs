use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lf_core::Axis;
use lf_fit::{horizontal_conv_raw_at, vertical_table};

fn bench_vertical_table(c: &mut Criterion) {
    let axis = Axis::with_samples(51).expect("valid axis");

    c.bench_function("vertical_table_51_samples", |b| {
        b.iter(|| {
            let table = vertical_table(black_box(&axis), 1e-4).expect("valid table");
            black_box(table.conv_values()[25]);
        });
    });
}

fn bench_horizontal_lag(c: &mut Criterion) {
    c.bench_function("horizontal_conv_raw_single_lag", |b| {
        b.iter(|| {
            let e = horizontal_conv_raw_at(black_box(0.3), 1e-2);
            black_box(e.value);
        });
    });
}

criterion_group!(benches, bench_vertical_table, bench_horizontal_lag);
criterion_main!(benches);
