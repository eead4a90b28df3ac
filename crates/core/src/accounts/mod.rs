//! Account resources served by the Doppler API (lists, subscribers)

pub mod ports;
