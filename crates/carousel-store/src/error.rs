use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Browser `localStorage` is missing, blocked, or rejected the write
    /// (quota, private mode).
    #[error("browser storage error: {reason}")]
    Web { reason: String },

    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}
