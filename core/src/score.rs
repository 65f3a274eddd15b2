use crate::index::{DocId, Index};
use serde::{Deserialize, Serialize};

/// BM25 tuning parameters.
///
/// `k1` controls term-frequency saturation, `b` controls document-length
/// normalization. The defaults (`k1 = 1.5`, `b = 0.75`) match the values the
/// engine has always shipped with; override them per deployment if relevance
/// tuning calls for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.5, b: 0.75 }
    }
}

fn idf(num_docs: u32, doc_freq: u32) -> f64 {
    ((num_docs as f64 - doc_freq as f64 + 0.5) / (doc_freq as f64 + 0.5)).ln()
}

/// Okapi BM25 score of `doc` against `query_terms`.
///
/// Terms are summed per occurrence: a query holding the same term twice
/// contributes that term's score twice (BM25 over the query bag, not the
/// query set). Terms absent from the corpus, or from this document, simply
/// contribute 0. The idf factor goes negative for terms present in more
/// than half the corpus; that is standard BM25 downweighting of
/// near-universal terms, not an error.
pub fn score(index: &Index, params: Bm25Params, query_terms: &[String], doc: DocId) -> f64 {
    let doc_len = index.doc_len(doc) as f64;
    let mut total = 0.0;

    for term in query_terms {
        let tf = index.term_freq(term, doc) as f64;
        let df = index.doc_freq(term);
        let denom = tf + params.k1 * (1.0 - params.b + params.b * doc_len / index.avg_doc_len());
        // denom hits zero when tf == 0 and k1*(1-b) == 0, and goes NaN when
        // every document normalized to zero tokens (avg_doc_len == 0, so the
        // length ratio is 0/0). Both cases can only occur with tf == 0, so
        // the contribution is defined as 0 rather than dividing.
        if denom == 0.0 || !denom.is_finite() {
            continue;
        }
        total += idf(index.num_docs(), df) * (tf * (params.k1 + 1.0)) / denom;
    }

    total
}
