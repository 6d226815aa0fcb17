//! # Outbound Ports (Driven Ports / SPI)
//!
//! Leaf services the parser depends on: URI parsing, public-key
//! decoding and request URI construction.

use crate::domain::entities::{Location, RelayPublicKey};
use crate::domain::errors::KeyCodecError;
use thiserror::Error;
use url::Url;

/// Syntax error from an address parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct AddressParseError {
    /// Parser diagnostic
    pub reason: String,
}

/// Syntactic URI parser.
///
/// Must support `user[:password]@` credentials in the authority.
pub trait AddressParser: Send + Sync {
    /// Parse a scheme-qualified address.
    fn parse_address(&self, address: &str) -> Result<Url, AddressParseError>;
}

/// Public key codec for the compressed 48-byte G1 encoding.
pub trait PublicKeyCodec: Send + Sync {
    /// Decode bare hex text (no `0x` prefix) into a public key.
    fn decode(&self, hex: &str) -> Result<RelayPublicKey, KeyCodecError>;

    /// Check whether a decoded key is the point-at-infinity.
    fn is_point_at_infinity(&self, key: &RelayPublicKey) -> bool;
}

/// Request URI builder.
///
/// The result keeps the scheme and written authority of `base` and
/// carries `path` as its path, whatever path `base` had.
pub trait RequestUriBuilder: Send + Sync {
    /// Combine a relay location with an API path.
    fn build_uri(&self, base: &Location, path: &str) -> String;
}
