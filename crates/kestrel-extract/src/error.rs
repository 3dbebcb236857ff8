use thiserror::Error;

/// Failures a page backend may report for a single structural query.
///
/// None of these escape the extractor: every variant is handled at the
/// smallest possible scope and treated as "this pattern did not
/// match", driving fallback progression instead of propagation.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("query timed out")]
    Timeout,

    #[error("stale or detached node: {0}")]
    Detached(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
