//! Lexical ranking engine: BM25 over an in-memory inverted index.
//!
//! Build once with [`Index::build`], then call [`rank`] as often and as
//! concurrently as you like against the shared, read-only index. The engine
//! does no I/O; loading the corpus and doing something with the ranked texts
//! are the caller's business.

pub mod error;
pub mod index;
pub mod rank;
pub mod score;
pub mod tokenizer;

pub use error::SearchError;
pub use index::{DocId, Index};
pub use rank::{rank, Hit};
pub use score::{score, Bm25Params};
pub use tokenizer::{normalize, ENGLISH_STOPWORDS};
