use thiserror::Error;

use crate::idspace::Counter;

/// Core error type shared across Acheron crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input corpus violates a structural requirement.
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),
    /// A range was requested for a category with no committed rows.
    #[error("no rows committed for {0}")]
    EmptyRange(Counter),
    /// A commit against a category whose successor in the same identifier
    /// space already holds rows.
    #[error("cannot commit {counter}: {later} already holds rows")]
    OutOfOrderCommit { counter: Counter, later: Counter },
}

/// Convenience alias for results returned by Acheron crates.
pub type Result<T> = std::result::Result<T, Error>;
