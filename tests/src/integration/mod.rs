//! Cross-crate integration tests

pub mod drills;
pub mod properties;
