use core::{rank, Bm25Params, Index, ENGLISH_STOPWORDS};
use criterion::{criterion_group, criterion_main, Criterion};

fn synthetic_corpus(n: usize) -> Vec<String> {
    // Deterministic pseudo-text so runs are comparable.
    let vocab = [
        "engine", "index", "query", "token", "corpus", "score", "rank", "term", "document",
        "search", "relevance", "frequency",
    ];
    (0..n)
        .map(|i| {
            (0..40)
                .map(|j| vocab[(i * 7 + j * 13) % vocab.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(2_000);
    c.bench_function("build_2k_docs", |b| {
        b.iter(|| Index::build(corpus.clone(), &ENGLISH_STOPWORDS).unwrap())
    });
}

fn bench_rank(c: &mut Criterion) {
    let index = Index::build(synthetic_corpus(2_000), &ENGLISH_STOPWORDS).unwrap();
    c.bench_function("rank_2k_docs_top10", |b| {
        b.iter(|| rank(&index, "search engine relevance", &ENGLISH_STOPWORDS, Bm25Params::default(), 10).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_rank);
criterion_main!(benches);
