//! # Doppler App
//!
//! Application layer - wiring and process-wide setup.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Tracing initialisation
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Owns the session store every client reads from

pub mod context;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use utils::logging::init_tracing;
