use std::path::PathBuf;

/// Errors that abort an aggregate check run. None of these are retried;
/// the caller maps them to the UNKNOWN exit code.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The HTTP request could not complete (network unreachable, TLS
    /// failure, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not parse as the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configuration handed to the pipeline is unusable.
    #[error("config error: {0}")]
    Config(String),

    /// The CA bundle file could not be read.
    #[error("failed to read CA bundle {path}: {source}")]
    CaBundle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
