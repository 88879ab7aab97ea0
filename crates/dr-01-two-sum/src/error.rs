//! Error types for the pair-sum drill
//!
//! A search that finds no pair is not an error; it yields `None`.

use thiserror::Error;

/// Errors that can occur when handling a pair-sum request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairSumError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Sequence too long: {len} > {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
