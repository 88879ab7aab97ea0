//! Result type for a successful pair-sum search

use serde::{Deserialize, Serialize};
use std::fmt;

/// Positions of two elements whose values add up to the target.
///
/// `second` is the position being examined when the match was discovered,
/// `first` is where its complement was recorded earlier in the scan, so
/// `first < second` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairIndices {
    /// Position of the complement
    pub first: usize,
    /// Position of the element that completed the pair
    pub second: usize,
}

impl PairIndices {
    /// Create a new pair
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Both positions as a tuple
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Check the pair against a sequence and target
    ///
    /// Returns true only if both positions are in range, ordered, and their
    /// values sum to `target` without overflow.
    pub fn is_valid_for(&self, sequence: &[i64], target: i64) -> bool {
        if self.first >= self.second || self.second >= sequence.len() {
            return false;
        }
        sequence[self.first].checked_add(sequence[self.second]) == Some(target)
    }
}

impl From<PairIndices> for (usize, usize) {
    fn from(pair: PairIndices) -> Self {
        pair.as_tuple()
    }
}

impl From<PairIndices> for [usize; 2] {
    fn from(pair: PairIndices) -> Self {
        [pair.first, pair.second]
    }
}

impl fmt::Display for PairIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
