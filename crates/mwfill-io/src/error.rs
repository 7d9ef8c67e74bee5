use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    Path {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Core(#[from] mwfill_core::error::Error),
}

impl Error {
    /// Attach the file path the failing operation was working on.
    pub fn at(self, path: &std::path::Path) -> Self {
        Error::Path {
            path: path.display().to_string(),
            source: Box::new(self),
        }
    }
}
