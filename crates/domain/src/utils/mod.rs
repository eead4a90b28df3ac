//! Domain utilities

pub mod validation;
