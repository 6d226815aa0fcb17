//! # Relay Gateway Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Key generation and logging setup
//! ├── properties.rs     # proptest properties of the parser
//! └── integration/      # End-to-end parse/render/request flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p relay-tests
//!
//! # By category
//! cargo test -p relay-tests integration::
//! cargo test -p relay-tests properties::
//!
//! # With parser logs
//! RUST_LOG=relay_gateway=debug cargo test -p relay-tests -- --nocapture
//! ```

pub mod fixtures;
pub mod integration;
