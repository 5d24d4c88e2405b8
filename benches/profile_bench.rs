//! Criterion benchmarks for profiling and rank-distance computation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ngram_langid::classify::rank_distance;
use ngram_langid::models::{LanguageCorpus, ProfilingParams};
use ngram_langid::ngram::{ngram_stats, ngrams};
use ngram_langid::normalize::normalize;
use ngram_langid::prelude::predict;
use ngram_langid::train::train;

/// Deterministic pseudo-text of `words` words drawn from a fixed vocabulary.
fn synthetic_text(words: usize, vocabulary: &[&str]) -> String {
    (0..words)
        .map(|i| vocabulary[i % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

const EN_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dogs", "and", "cats",
    "with", "happy", "families", "near", "shore",
];

const FR_WORDS: &[&str] = &[
    "le", "renard", "brun", "saute", "par", "dessus", "chien", "paresseux", "et", "chats",
    "avec", "familles", "heureuses", "pres", "bord",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000] {
        let text = synthetic_text(size, EN_WORDS).to_uppercase();

        group.bench_with_input(BenchmarkId::new("words", size), &size, |b, _| {
            b.iter(|| normalize(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_ngram_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngram_extraction");

    for size in [100, 1000, 10000] {
        let text = normalize(&synthetic_text(size, EN_WORDS));

        group.bench_with_input(BenchmarkId::new("bigrams", size), &size, |b, _| {
            b.iter(|| ngrams(black_box(&text), 2).count())
        });

        group.bench_with_input(BenchmarkId::new("trigrams", size), &size, |b, _| {
            b.iter(|| ngrams(black_box(&text), 3).count())
        });
    }

    group.finish();
}

fn bench_profiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiling");

    for size in [100, 1000, 10000] {
        let text = normalize(&synthetic_text(size, EN_WORDS));

        group.bench_with_input(BenchmarkId::new("ngram_stats", size), &size, |b, _| {
            b.iter(|| ngram_stats(ngrams(black_box(&text), 2)))
        });
    }

    group.finish();
}

fn bench_rank_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_distance");

    for size in [100, 1000, 10000] {
        let reference = ngram_stats(ngrams(&normalize(&synthetic_text(size, EN_WORDS)), 2));

        // Same-language query: every n-gram in vocabulary
        let query_same = ngram_stats(ngrams(&normalize(&synthetic_text(200, EN_WORDS)), 2));

        group.bench_with_input(BenchmarkId::new("in_vocabulary", size), &size, |b, _| {
            b.iter(|| rank_distance(black_box(&reference), black_box(&query_same)))
        });

        // Cross-language query: out-of-vocabulary lookups included
        let query_other = ngram_stats(ngrams(&normalize(&synthetic_text(200, FR_WORDS)), 2));

        group.bench_with_input(BenchmarkId::new("cross_language", size), &size, |b, _| {
            b.iter(|| rank_distance(black_box(&reference), black_box(&query_other)))
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let params = ProfilingParams { ngram_size: 2 };

    let corpora = vec![
        LanguageCorpus {
            language: "en".to_string(),
            documents: vec![synthetic_text(10000, EN_WORDS)],
        },
        LanguageCorpus {
            language: "fr".to_string(),
            documents: vec![synthetic_text(10000, FR_WORDS)],
        },
    ];
    let profiles = train(&corpora, &params);

    let mut group = c.benchmark_group("predict");

    for snippet_words in [20, 200] {
        let query = synthetic_text(snippet_words, EN_WORDS);

        group.bench_with_input(
            BenchmarkId::new("two_languages", snippet_words),
            &snippet_words,
            |b, _| b.iter(|| predict(black_box(&profiles), black_box(&query), &params)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_ngram_extraction,
    bench_profiling,
    bench_rank_distance,
    bench_predict
);
criterion_main!(benches);
