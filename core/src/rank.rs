use crate::error::SearchError;
use crate::index::{DocId, Index};
use crate::score::{score, Bm25Params};
use crate::tokenizer::normalize;
use serde::Serialize;
use std::collections::HashSet;

/// One ranked result. Carries the original document text so the caller can
/// hand the top hits straight to whatever consumes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub text: String,
    pub score: f64,
}

/// Rank every document in the index against `query` and return the top `k`.
///
/// `stopwords` must be the same set the index was built with; the engine
/// cannot detect a mismatch, it just returns worse rankings. Ordering is
/// deterministic: descending score, ties broken by ascending doc id. Asking
/// for more hits than there are documents returns them all.
///
/// Takes the index by shared reference and touches no other state, so any
/// number of rank calls may run concurrently against one `Index`.
pub fn rank(
    index: &Index,
    query: &str,
    stopwords: &HashSet<String>,
    params: Bm25Params,
    k: usize,
) -> Result<Vec<Hit>, SearchError> {
    if k == 0 {
        return Err(SearchError::InvalidTopK { k });
    }

    let query_terms = normalize(query, stopwords);

    let mut scored: Vec<(DocId, f64)> = (0..index.num_docs())
        .map(|doc_id| (doc_id, score(index, params, &query_terms, doc_id)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(k);

    tracing::debug!(
        query,
        terms = query_terms.len(),
        returned = scored.len(),
        "ranked query"
    );

    Ok(scored
        .into_iter()
        .map(|(doc_id, score)| Hit {
            doc_id,
            text: index.doc_text(doc_id).unwrap_or_default().to_string(),
            score,
        })
        .collect())
}
