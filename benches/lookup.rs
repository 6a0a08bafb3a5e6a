use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sysenv::*;

fn criterion_benchmark(c: &mut Criterion) {
    set_property("hello", "world");
    let env = SystemEnvironment;

    c.bench_function("property_hit", |b| {
        b.iter(|| env.get_property(black_box("hello")))
    });

    c.bench_function("property_miss", |b| {
        b.iter(|| env.get_property(black_box("world")))
    });

    c.bench_function("variable_hit", |b| {
        b.iter(|| env.get_variable(black_box("PATH")))
    });

    c.bench_function("variable_miss", |b| {
        b.iter(|| env.get_variable(black_box("DEFINITELY_UNSET_VAR_123")))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
