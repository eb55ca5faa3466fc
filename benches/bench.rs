// Criterion benchmarks for the request normalizers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use health_api::core::text::{clean_text, extract_keywords};

fn bench_clean_text(c: &mut Criterion) {
    c.bench_function("clean_text", |b| {
        b.iter(|| clean_text(black_box("Fever, Cough & mild HEADACHE since 3 days!")));
    });
}

fn bench_extract_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_keywords");

    for word_count in [4, 16, 64, 256].iter() {
        let input = (0..*word_count)
            .map(|i| format!("symptom{}", i))
            .collect::<Vec<_>>()
            .join(", ");

        group.bench_with_input(
            BenchmarkId::from_parameter(word_count),
            &input,
            |b, input| {
                b.iter(|| extract_keywords(black_box(input)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_clean_text, bench_extract_keywords);
criterion_main!(benches);
