//! # DR-01 Two Sum
//!
//! Given a sequence of integers and a target, find the positions of two
//! elements whose values add up to the target.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure search logic, no I/O
//!   - `find_pair_indices`: Single-pass seen-map search
//!   - `PairIndices`: Result pair
//!   - `PairSumConfig`: Limits with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `PairSumApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `PairSumService`: Implements `PairSumApi` with logging and metrics
//!
//! - **Events Layer** (`events/`): Serialisable request/response messages
//!
//! ## Invariants
//!
//! - **ORDERED**: a returned pair always has `first < second`
//! - **SUM**: `sequence[first] + sequence[second] == target`
//! - **EARLIEST**: the reported pair has the smallest possible `second`, and
//!   for that `second`, the smallest `first`
//! - **ABSENT**: no pair is `None`, never a sentinel pair
//!
//! ## Usage Example
//!
//! ```
//! use dr_01_two_sum::{find_pair_indices, PairIndices, PairSumApi, PairSumService};
//!
//! assert_eq!(find_pair_indices(&[3, 3], 6), Some(PairIndices::new(0, 1)));
//!
//! let service = PairSumService::without_metrics();
//! assert_eq!(service.find_pair(&[1, 5, 3, 5], 8).unwrap(), Some(PairIndices::new(1, 2)));
//! ```

pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{find_pair_indices, PairIndices, PairSumConfig, PairSumConfigBuilder};
pub use error::PairSumError;
pub use events::{ErrorResponse, FindPairRequest, FindPairResponse};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::PairSumApi;
pub use service::PairSumService;
