//! Plan catalogue

pub mod ports;
pub mod service;
