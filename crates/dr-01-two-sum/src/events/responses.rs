//! Response messages

use serde::{Deserialize, Serialize};

use crate::domain::PairIndices;
use crate::error::PairSumError;

/// Result of a pair search
///
/// `indices` is `None` when no pair exists, which is distinct from every
/// valid pair including `(0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindPairResponse {
    /// Correlation ID matching the request
    pub correlation_id: u64,
    /// Matching positions, if any
    pub indices: Option<PairIndices>,
}

impl FindPairResponse {
    /// Whether a pair was found
    pub fn found(&self) -> bool {
        self.indices.is_some()
    }
}

/// Error response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Correlation ID matching the request
    pub correlation_id: u64,
    /// Error code
    pub error_code: u32,
    /// Error message
    pub error_message: String,
}

impl ErrorResponse {
    /// Build an error response for a failed request
    pub fn from_error(correlation_id: u64, error: &PairSumError) -> Self {
        Self {
            correlation_id,
            error_code: error_codes::for_error(error),
            error_message: error.to_string(),
        }
    }
}

/// Error codes for pair-sum requests
pub mod error_codes {
    use crate::error::PairSumError;

    /// Required argument missing
    pub const INVALID_ARGUMENT: u32 = 1001;
    /// Sequence longer than the configured limit
    pub const SEQUENCE_TOO_LONG: u32 = 1002;
    /// Service misconfigured
    pub const INVALID_CONFIG: u32 = 1003;

    /// Map an error to its code
    pub fn for_error(error: &PairSumError) -> u32 {
        match error {
            PairSumError::InvalidArgument(_) => INVALID_ARGUMENT,
            PairSumError::SequenceTooLong { .. } => SEQUENCE_TOO_LONG,
            PairSumError::InvalidConfig(_) => INVALID_CONFIG,
        }
    }
}
