//! Inbound Ports (Driving Ports)
//!
//! The API that external components use to run pair-sum searches.

use crate::domain::PairIndices;
use crate::error::PairSumError;
use crate::events::{FindPairRequest, FindPairResponse};

/// Primary pair-sum API (Driving Port)
pub trait PairSumApi: Send + Sync {
    /// Search `sequence` for two positions whose values sum to `target`
    ///
    /// # Returns
    /// * `Ok(Some(pair))` - the first pair found by a left-to-right scan
    /// * `Ok(None)` - no pair exists
    /// * `Err(_)` - the input was rejected before searching
    fn find_pair(&self, sequence: &[i64], target: i64)
        -> Result<Option<PairIndices>, PairSumError>;

    /// Handle a serialised request
    ///
    /// Fails with [`PairSumError::InvalidArgument`] if the request carries no
    /// sequence.
    fn handle(&self, request: &FindPairRequest) -> Result<FindPairResponse, PairSumError>;
}
