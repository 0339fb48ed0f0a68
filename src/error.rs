//! Error types for the mining core
//!
//! All violations are detected synchronously at the call site; nothing is
//! retried internally. The CLI maps these onto a non-zero exit via anyhow.

use thiserror::Error;

/// Errors raised by the encoder, miner, and rule generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinerError {
    /// No transactions, or every transaction was empty
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Threshold out of range or unrecognized metric name
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Results requested before the pipeline produced them
    #[error("no rules have been computed yet; run the mining pipeline first")]
    NotComputed,
}

pub type Result<T> = std::result::Result<T, MinerError>;
