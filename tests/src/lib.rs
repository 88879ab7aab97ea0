//! # Algo-Drills Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs       # Request handling through the service, with logging
//!     ├── properties.rs  # Randomised checks against brute-force oracles
//!     └── drills.rs      # Drills used together
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dr-tests
//!
//! # By category
//! cargo test -p dr-tests integration::flows::
//! cargo test -p dr-tests integration::properties::
//! ```

pub mod integration;
