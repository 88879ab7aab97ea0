//! Events Layer - Request and response messages
//!
//! Serde-serialisable envelopes for callers that hand searches over as data
//! rather than calling the finder directly.

pub mod requests;
pub mod responses;

pub use requests::FindPairRequest;
pub use responses::{error_codes, ErrorResponse, FindPairResponse};
