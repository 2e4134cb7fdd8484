use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delimatch::classify;

fn classify_benchmark(c: &mut Criterion) {
    let flat = "()[]{}".repeat(500);
    c.bench_function("classify flat sequence", |b| {
        b.iter(|| classify(black_box(&flat)).unwrap())
    });

    let nested = format!("{}{}", "([{".repeat(500), "}])".repeat(500));
    c.bench_function("classify deep nesting", |b| {
        b.iter(|| classify(black_box(&nested)).unwrap())
    });
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
