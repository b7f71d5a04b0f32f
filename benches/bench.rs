use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use calluna::{Document, Engine, Operator};

const VOCAB: [&str; 12] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu",
];

fn generate_document(i: usize) -> Document {
    let first = VOCAB[i % VOCAB.len()];
    let second = VOCAB[(i / 2) % VOCAB.len()];
    let third = VOCAB[(i / 3) % VOCAB.len()];
    Document::new()
        .add_text("title", format!("document {i}"))
        .add_text("body", format!("{first} {second} {third} common"))
}

fn build_engine(count: usize) -> Engine {
    let mut engine = Engine::default();
    for i in 0..count {
        engine.add_document(generate_document(i));
    }
    engine
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Indexing");
    group.sample_size(10);

    for count in [1000, 5000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let engine = build_engine(count);
                black_box(engine.stats().document_count)
            })
        });
    }
    group.finish();
}

fn bench_and_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("AND Search");
    let engine = build_engine(5000);

    let queries: [&[&str]; 3] = [
        &["common"],
        &["common", "alpha"],
        &["common", "alpha", "delta"],
    ];
    for terms in queries {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(terms.len()),
            &terms,
            |b, &terms| b.iter(|| black_box(engine.search(terms, Operator::And).unwrap())),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_indexing, bench_and_search);
criterion_main!(benches);
