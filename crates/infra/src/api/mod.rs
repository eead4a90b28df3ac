//! Doppler backend clients
//!
//! [`ApiClient`] owns the HTTP transport and the session provider; the
//! per-service clients built on top of it implement the `doppler-core`
//! ports.
//!
//! # Architecture
//!
//! - Uses [`crate::http::HttpClient`] (no direct reqwest client)
//! - `Authorization: token {jwt}` from the session snapshot on every call
//! - One attempt per call, bounded by the configured timeout
//! - Strict payload decoding at the boundary

pub mod billing;
pub mod client;
pub mod doppler;
pub mod payloads;
pub mod plans;
pub mod response;
pub mod static_data;

pub use billing::HttpBillingUserApiClient;
pub use client::{ApiClient, ApiClientConfig};
pub use doppler::HttpDopplerApiClient;
pub use plans::HttpAccountPlansApiClient;
pub use static_data::HttpStaticDataClient;
