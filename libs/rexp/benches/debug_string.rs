//! Criterion benchmarks for debug rendering and coercions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rengine_rexp::{
    AttributeMap, DoubleVector, ExpressionValue, IntegerVector, ListVector, Rexp, StringVector,
};
use std::sync::Arc;
use std::time::Duration;

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(100))
        .measurement_time(Duration::from_secs(1))
        .nresamples(1000)
}

fn large_double_vector() -> DoubleVector {
    let attrs = AttributeMap::new()
        .with("dim", IntegerVector::new(vec![1000, 100]))
        .with("class", StringVector::from_strs(&["matrix", "array"]));
    DoubleVector::with_attributes(
        (0..100_000).map(|i| i as f64 * 0.5).collect(),
        Arc::new(attrs),
    )
}

fn bench_debug_strings(c: &mut Criterion) {
    let doubles = large_double_vector();
    c.bench_function("debug_string_large_double", |b| {
        b.iter(|| black_box(&doubles).to_debug_string())
    });

    let list = Rexp::from(ListVector::from_named(
        (0..64_i32).map(|i| (format!("col{}", i), Rexp::from(vec![i; 100]))),
    ));
    c.bench_function("debug_string_nested_list", |b| {
        b.iter(|| black_box(&list).to_debug_string())
    });
}

fn bench_coercions(c: &mut Criterion) {
    let doubles = large_double_vector();

    c.bench_function("double_as_integers", |b| {
        b.iter(|| black_box(&doubles).as_integers())
    });

    c.bench_function("double_as_strings", |b| {
        b.iter(|| black_box(&doubles).as_strings())
    });

    c.bench_function("double_is_na", |b| b.iter(|| black_box(&doubles).is_na()));
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets =
        bench_debug_strings,
        bench_coercions
}
criterion_main!(benches);
