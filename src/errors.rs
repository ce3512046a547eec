use thiserror::Error;

/// Error type shared by every report operation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Decimal overflow: {0}")]
    Overflow(String),
    #[error("Malformed period label: {0}")]
    MalformedPeriodLabel(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
