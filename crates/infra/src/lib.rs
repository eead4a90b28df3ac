//! # Doppler Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - The authenticated Doppler API client and one client per backend service
//! - Wire payload decoders for every DTO
//! - The configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `doppler-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, HttpAccountPlansApiClient, HttpBillingUserApiClient,
    HttpDopplerApiClient, HttpStaticDataClient,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
