//! Ports Layer
//!
//! Defines the driving port callers use to run searches. The finder needs no
//! driven ports: it reads nothing beyond its arguments.

pub mod inbound;

pub use inbound::PairSumApi;
