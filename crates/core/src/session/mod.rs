//! Session access for the API clients

pub mod ports;
pub mod store;
