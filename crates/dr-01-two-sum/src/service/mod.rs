//! Service Layer
//!
//! Wraps the domain finder with configuration, validation, logging and
//! metrics.

pub mod pair_sum_service;

pub use pair_sum_service::PairSumService;
