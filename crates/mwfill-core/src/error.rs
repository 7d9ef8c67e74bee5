use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Malformed reference row at line {line}: no key column")]
    MalformedReferenceRow { line: usize },
}
