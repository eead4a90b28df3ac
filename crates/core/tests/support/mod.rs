//! Shared test helpers for `doppler-core` integration tests.
//!
//! Canned implementations of the client ports so view tests can focus on
//! state transitions instead of HTTP.

#![allow(dead_code)]

pub mod clients;
