//! Domain Layer - Pure search logic
//!
//! This layer contains:
//! - The single-pass pair-sum finder
//! - The result type
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging; the service layer logs
//! - Pure functions where possible

pub mod config;
pub mod finder;
pub mod pair;

pub use config::{PairSumConfig, PairSumConfigBuilder};
pub use finder::{find_pair_indices, find_pair_indices_brute_force, find_pair_indices_lazy};
pub use pair::PairIndices;
