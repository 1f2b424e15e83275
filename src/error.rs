use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    /// The digit oracle could not produce a digit; the ledger cannot publish a target.
    #[error("digit oracle failed at position {n}: {reason}")]
    Oracle { n: u32, reason: String },
    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ChainError {
    pub fn oracle(n: u32, reason: impl Into<String>) -> Self {
        ChainError::Oracle {
            n,
            reason: reason.into(),
        }
    }
}
