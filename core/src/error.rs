use thiserror::Error;

/// Input-validation failures surfaced by index construction and ranking.
/// Both are deterministic caller errors; neither warrants a retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The corpus had zero documents, so average document length is undefined.
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// The requested result count was not positive.
    #[error("top-k must be at least 1, got {k}")]
    InvalidTopK { k: usize },
}
