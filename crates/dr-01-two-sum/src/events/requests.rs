//! Request messages

use serde::{Deserialize, Serialize};

use crate::error::PairSumError;

/// Request to search a sequence for a pair summing to `target`
///
/// `sequence` is optional on the wire; a request without one is rejected
/// with [`PairSumError::InvalidArgument`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindPairRequest {
    /// Correlation ID for request-response matching
    pub correlation_id: u64,
    /// Sequence to search
    #[serde(default)]
    pub sequence: Option<Vec<i64>>,
    /// Desired sum
    pub target: i64,
}

impl FindPairRequest {
    /// Create a request carrying a sequence
    pub fn new(correlation_id: u64, sequence: Vec<i64>, target: i64) -> Self {
        Self {
            correlation_id,
            sequence: Some(sequence),
            target,
        }
    }

    /// Borrow the sequence, failing fast if it is absent
    pub fn sequence(&self) -> Result<&[i64], PairSumError> {
        self.sequence.as_deref().ok_or_else(|| {
            PairSumError::InvalidArgument("sequence must be provided".to_string())
        })
    }
}
