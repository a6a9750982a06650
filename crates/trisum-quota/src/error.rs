use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotaError {
    #[error("Usage store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Usage record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuotaError>;
