use thiserror::Error;

use crate::types::Mood;

/// I/O failure on a single storage key.
#[derive(Error, Debug)]
#[error("storage key `{key}`: {source}")]
pub(crate) struct StorageError {
    pub key: String,
    #[source]
    pub source: std::io::Error,
}

impl StorageError {
    pub(crate) fn new(key: &str, source: std::io::Error) -> Self {
        Self {
            key: key.to_string(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum Error {
    /// Writing (or removing) the persisted history failed. The in-memory
    /// history is still up to date.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mood `{input}` (expected one of: {})", Mood::names().join(", "))]
pub(crate) struct UnknownMood {
    pub input: String,
}
