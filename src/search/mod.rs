//! Encoding search terms and looking them up in anonymized CSV data

pub mod encode;
pub mod main;
pub mod query;
pub mod table;

pub use query::{ColumnSelector, EncodedQuery, Query, SearchMatch, Searcher, ANY_COLUMN};
pub use table::AnonymizedTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Every query must match.
    All,
    /// At least one query must match.
    Any,
}
