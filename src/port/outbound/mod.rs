//! Outbound ports implemented by adapters.

pub mod generator;
