use crate::error::SearchError;
use crate::tokenizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type DocId = u32;

/// Immutable inverted index plus the corpus statistics BM25 needs.
///
/// Built once from a corpus, then shared read-only across any number of
/// concurrent queries. Document ids are corpus positions, starting at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// term -> {doc_id -> term frequency}
    inverted: HashMap<String, HashMap<DocId, u32>>,
    /// doc_id -> token count after normalization
    doc_lengths: Vec<u32>,
    avg_doc_len: f64,
    num_docs: u32,
    /// Original texts, owned by the index so hits can carry them out.
    docs: Vec<String>,
}

impl Index {
    /// Build the index over `corpus`, normalizing every document with
    /// `stopwords`. The same stop-word set must be used when ranking queries
    /// against the result; a mismatch silently degrades relevance.
    ///
    /// Returns [`SearchError::EmptyCorpus`] for a zero-document corpus.
    /// Building twice from the same input yields structurally identical
    /// indexes.
    pub fn build(corpus: Vec<String>, stopwords: &HashSet<String>) -> Result<Index, SearchError> {
        if corpus.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let mut inverted: HashMap<String, HashMap<DocId, u32>> = HashMap::new();
        let mut doc_lengths: Vec<u32> = Vec::with_capacity(corpus.len());
        let mut total_len: u64 = 0;

        for (doc_id, text) in corpus.iter().enumerate() {
            let tokens = normalize(text, stopwords);
            doc_lengths.push(tokens.len() as u32);
            total_len += tokens.len() as u64;
            for token in tokens {
                *inverted
                    .entry(token)
                    .or_default()
                    .entry(doc_id as DocId)
                    .or_insert(0) += 1;
            }
        }

        let num_docs = corpus.len() as u32;
        let avg_doc_len = total_len as f64 / corpus.len() as f64;
        tracing::debug!(
            num_docs,
            num_terms = inverted.len(),
            avg_doc_len,
            "index built"
        );

        Ok(Index {
            inverted,
            doc_lengths,
            avg_doc_len,
            num_docs,
            docs: corpus,
        })
    }

    /// Total number of documents in the corpus.
    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    /// Arithmetic mean of per-document token counts.
    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Token count of `doc`, or 0 for an unknown id.
    pub fn doc_len(&self, doc: DocId) -> u32 {
        self.doc_lengths.get(doc as usize).copied().unwrap_or(0)
    }

    /// Occurrences of `term` in `doc`; 0 when either is unknown.
    pub fn term_freq(&self, term: &str, doc: DocId) -> u32 {
        self.inverted
            .get(term)
            .and_then(|postings| postings.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct documents containing `term`; 0 for unseen terms.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.inverted.get(term).map_or(0, |postings| postings.len() as u32)
    }

    /// Original text of `doc`, or `None` for an unknown id.
    pub fn doc_text(&self, doc: DocId) -> Option<&str> {
        self.docs.get(doc as usize).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_stopwords() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let err = Index::build(Vec::new(), &no_stopwords()).unwrap_err();
        assert_eq!(err, SearchError::EmptyCorpus);
    }

    #[test]
    fn counts_frequencies_and_lengths() {
        let corpus = vec!["cat cat dog".to_string(), "dog".to_string()];
        let index = Index::build(corpus, &no_stopwords()).unwrap();

        assert_eq!(index.num_docs(), 2);
        assert_eq!(index.doc_len(0), 3);
        assert_eq!(index.doc_len(1), 1);
        assert_eq!(index.avg_doc_len(), 2.0);
        assert_eq!(index.term_freq("cat", 0), 2);
        assert_eq!(index.term_freq("cat", 1), 0);
        assert_eq!(index.doc_freq("dog"), 2);
        assert_eq!(index.doc_freq("bird"), 0);
    }

    #[test]
    fn stopwords_excluded_from_stats() {
        let stops: HashSet<String> = ["a"].iter().map(|s| s.to_string()).collect();
        let corpus = vec!["a b".to_string()];
        let index = Index::build(corpus, &stops).unwrap();
        assert_eq!(index.doc_len(0), 1);
        assert_eq!(index.doc_freq("a"), 0);
        assert_eq!(index.doc_freq("b"), 1);
    }

    #[test]
    fn unknown_ids_default_to_zero() {
        let index = Index::build(vec!["x".to_string()], &no_stopwords()).unwrap();
        assert_eq!(index.doc_len(99), 0);
        assert_eq!(index.term_freq("x", 99), 0);
        assert_eq!(index.doc_text(0), Some("x"));
        assert_eq!(index.doc_text(99), None);
    }
}
