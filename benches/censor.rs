#[cfg(feature = "criterion")]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
#[cfg(feature = "criterion")]
use sensitive_filter::{FilterBuilder, MatchMode};

#[cfg(feature = "criterion")]
const WORDS: &[&str] = &[
    "bad", "evil", "wrong", "bad word", "test@123", "测试", "敏感词", "verylongsensitiveword",
];

#[cfg(feature = "criterion")]
fn input() -> String {
    "This is a bad example with evil intentions, 这是一个测试敏感词的例子, and wrong decisions. "
        .repeat(256)
}

#[cfg(feature = "criterion")]
fn build_benchmark(c: &mut Criterion) {
    let words = (0..1000)
        .map(|i| format!("{}{}", WORDS[i % WORDS.len()], i))
        .collect::<Vec<_>>();

    c.bench_function("build", |b| {
        b.iter(|| black_box(FilterBuilder::new().words(black_box(&words)).build()))
    });
}

#[cfg(feature = "criterion")]
fn censor_benchmark(c: &mut Criterion) {
    let direct = FilterBuilder::new().words(WORDS).build();
    let exhaustive = FilterBuilder::new()
        .words(WORDS)
        .match_mode(MatchMode::Exhaustive)
        .build();
    let input = input();

    c.bench_function("censor direct", |b| {
        b.iter(|| black_box(direct.censor(black_box(&input))))
    });
    c.bench_function("censor exhaustive", |b| {
        b.iter(|| black_box(exhaustive.censor(black_box(&input))))
    });
}

#[cfg(feature = "criterion")]
criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = build_benchmark, censor_benchmark
}
#[cfg(feature = "criterion")]
criterion_main!(benches);

#[cfg(not(feature = "criterion"))]
fn main() {}
