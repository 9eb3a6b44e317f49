use promptvars_core::walker::WalkerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no such file or directory: {0}")]
    Missing(String),

    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("failed to create log file {0}: {1}")]
    LogFile(String, #[source] std::io::Error),

    #[error(transparent)]
    Walk(#[from] WalkerError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(&'static str),
}
