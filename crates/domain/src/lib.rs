//! # Doppler Domain
//!
//! Business domain types and models for the Doppler billing client.
//!
//! This crate contains:
//! - Data transfer objects returned by the API clients (lists, subscribers,
//!   billing information, payment methods, plans)
//! - Session data consulted before every authenticated request
//! - The result envelope shared by all client operations
//! - Configuration structures
//! - Field validators used by the checkout forms
//!
//! ## Architecture
//! - No dependencies on other Doppler crates
//! - No I/O: pure data and rules

pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod macros;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use envelope::*;
pub use errors::*;
pub use session::*;
pub use types::*;
pub use utils::validation::{
    validate_cuit, validate_max_length, validate_required, FieldError, ValidationErrors,
};
