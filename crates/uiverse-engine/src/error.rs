//! Engine error taxonomy.

use thiserror::Error;

use crate::browser::SessionError;

/// Errors surfaced to callers of the extraction engine.
///
/// Only input validation and fatal browser failures appear here. Flaky-UI
/// failures (missed clicks, unconfirmed copies, empty clipboards) degrade to
/// empty fragments and never become errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("query must not be empty; expected \"<framework> <link>\"")]
    EmptyQuery,

    #[error("malformed query; expected \"<framework> <link>\"")]
    MalformedQuery,

    #[error("unsupported framework: {0}")]
    UnsupportedFramework(String),

    #[error("invalid link: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}
