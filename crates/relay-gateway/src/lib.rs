//! # Relay Gateway
//!
//! Parses relay addresses into validated endpoint identities: a network
//! location plus the BLS12-381 public key the relay signs responses with.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure parsing and key-decoding logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): `url` and `blst` implementations of the outbound ports
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Accepted Forms
//!
//! | Input | Result |
//! |-------|--------|
//! | `PUBKEY@HOST:PORT` | `http://PUBKEY@HOST:PORT` |
//! | `https://PUBKEY@HOST/PATH` | kept as given |
//! | `HOST:PORT` | `MissingPublicKey` |
//!
//! ## Security Notes
//!
//! - **Point-at-infinity**: the G1 identity element decodes but is rejected
//! - **Subgroup check**: every other key must pass `blst` key validation
//! - **Plaintext default**: addresses without a scheme get `http://` unless
//!   `default_scheme` is configured otherwise

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::key_codec::BlstKeyCodec;
pub use adapters::uri::{UrlAddressParser, UrlRequestUriBuilder};
pub use domain::config::GatewayParserConfig;
pub use domain::entities::{Gateway, Location, RelayPublicKey, PUBLIC_KEY_LENGTH};
pub use domain::errors::{ConfigError, GatewayError, KeyCodecError};
pub use ports::inbound::GatewayParserApi;
pub use ports::outbound::{AddressParseError, AddressParser, PublicKeyCodec, RequestUriBuilder};
pub use service::GatewayParserService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
