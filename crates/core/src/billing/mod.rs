//! Billing resources: billing information, payment method, consumer types

pub mod ports;
