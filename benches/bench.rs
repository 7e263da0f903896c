//! Criterion benchmarks for doclex.
//!
//! Covers the steps every statistic depends on:
//! - Tokenization
//! - Frequency aggregation
//! - POS tagging and stemming

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use doclex::analysis::analyzer::WordAnalyzer;
use doclex::document::Document;
use doclex::document_analyzer::DocumentAnalyzer;
use doclex::language::LanguageCode;
use doclex::stats::{pos_tag_counts, word_count, word_frequency};

/// Generate a document body of roughly `word_count` words.
fn generate_body(word_count: usize) -> String {
    let words = [
        "The", "cats", "are", "running", "through", "the", "garden,", "while", "a", "dog",
        "ran", "quickly", "after", "them.", "Happiness", "is", "a", "warm", "puppy!",
        "Children", "played", "games", "in", "the", "morning;", "their", "parents",
        "watched", "carefully", "from", "the", "house.", "Don't", "re-use", "e-mail",
        "addresses", "(please).",
    ];

    let mut body = Vec::with_capacity(word_count);
    for i in 0..word_count {
        body.push(words[(i * 7 + i / 3) % words.len()]);
    }
    body.join(" ")
}

/// Benchmark tokenization of bodies of growing size.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let analyzer = WordAnalyzer::new().unwrap();

    for size in [100, 1_000, 10_000] {
        let body = generate_body(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| black_box(analyzer.tokenize(black_box(body)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark counting and frequency tables over pre-tokenized input.
fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let tokens = WordAnalyzer::new()
        .unwrap()
        .tokenize(&generate_body(10_000))
        .unwrap();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("word_count_unique", |b| {
        b.iter(|| black_box(word_count(black_box(&tokens), true)))
    });
    group.bench_function("word_frequency", |b| {
        b.iter(|| black_box(word_frequency(black_box(&tokens))))
    });

    group.finish();
}

/// Benchmark the annotation steps.
fn bench_annotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotation");

    let analyzer = DocumentAnalyzer::new(Document::from_text(generate_body(1_000))).unwrap();
    let tokens = analyzer.tokens().unwrap();
    let english = LanguageCode::new("eng");

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("pos_tag_counts", |b| {
        b.iter(|| {
            let tags = analyzer.pos_tags_of(black_box(&tokens), &english, false).unwrap();
            black_box(pos_tag_counts(&tags))
        })
    });
    group.bench_function("stem", |b| {
        b.iter(|| black_box(analyzer.stem_of(black_box(&tokens), &english).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_aggregation, bench_annotation);
criterion_main!(benches);
