//! Pair-sum service configuration and validation
//!
//! # Example
//!
//! ```
//! use dr_01_two_sum::domain::PairSumConfigBuilder;
//!
//! let config = PairSumConfigBuilder::new()
//!     .max_sequence_len(10_000)
//!     .preallocate_seen_map(false)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.max_sequence_len, 10_000);
//! ```

use crate::error::PairSumError;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::PairSumService`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSumConfig {
    /// Longest sequence a request may carry
    pub max_sequence_len: usize,
    /// Size the seen-map to the input before scanning
    pub preallocate_seen_map: bool,
}

impl Default for PairSumConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: usize::MAX,
            preallocate_seen_map: true,
        }
    }
}

impl PairSumConfig {
    /// Create a new configuration with validation
    pub fn new(max_sequence_len: usize, preallocate_seen_map: bool) -> Result<Self, PairSumError> {
        let config = Self {
            max_sequence_len,
            preallocate_seen_map,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PairSumError> {
        if self.max_sequence_len == 0 {
            return Err(PairSumError::InvalidConfig(
                "max_sequence_len cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a sequence length against the configured limit
    pub fn check_len(&self, len: usize) -> Result<(), PairSumError> {
        if len > self.max_sequence_len {
            return Err(PairSumError::SequenceTooLong {
                len,
                max: self.max_sequence_len,
            });
        }
        Ok(())
    }

    /// Builder-style method to set the sequence length limit
    pub fn with_max_sequence_len(mut self, max: usize) -> Self {
        self.max_sequence_len = max;
        self
    }

    /// Builder-style method to toggle seen-map preallocation
    pub fn with_preallocate_seen_map(mut self, preallocate: bool) -> Self {
        self.preallocate_seen_map = preallocate;
        self
    }
}

/// Builder for PairSumConfig with validation
#[derive(Default)]
pub struct PairSumConfigBuilder {
    max_sequence_len: Option<usize>,
    preallocate_seen_map: Option<bool>,
}

impl PairSumConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest accepted sequence (must be non-zero)
    pub fn max_sequence_len(mut self, max: usize) -> Self {
        self.max_sequence_len = Some(max);
        self
    }

    /// Set whether the seen-map is sized to the input up front
    pub fn preallocate_seen_map(mut self, preallocate: bool) -> Self {
        self.preallocate_seen_map = Some(preallocate);
        self
    }

    /// Build the PairSumConfig, validating all parameters
    pub fn build(self) -> Result<PairSumConfig, PairSumError> {
        let defaults = PairSumConfig::default();

        let config = PairSumConfig {
            max_sequence_len: self.max_sequence_len.unwrap_or(defaults.max_sequence_len),
            preallocate_seen_map: self
                .preallocate_seen_map
                .unwrap_or(defaults.preallocate_seen_map),
        };

        config.validate()?;
        Ok(config)
    }
}
