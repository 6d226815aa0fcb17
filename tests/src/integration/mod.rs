//! # Integration Tests
//!
//! End-to-end flows through the public API of `relay-gateway`.

pub mod config_flows;
