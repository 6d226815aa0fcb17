//! # Domain Entities
//!
//! Core data structures for relay endpoint identities.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use url::Url;

use super::uri::{join_request_uri, render_location};

/// Length of a compressed BLS12-381 G1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 48;

// =============================================================================
// BLS Types (BLS12-381)
// =============================================================================

/// Relay public key (G1 point, compressed).
///
/// The relay signs its responses with the matching secret key; callers
/// authenticate responses against this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelayPublicKey {
    /// G1 point (48 bytes compressed)
    pub bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl RelayPublicKey {
    /// Wrap raw compressed bytes. No curve validation is performed here.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Lower-case hex with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl fmt::Display for RelayPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// Location
// =============================================================================

/// A parsed relay location.
///
/// The URL parser normalizes the authority (lower-cases the host, drops a
/// default port, expands shorthand IPv4), so the `host[:port]` text is
/// kept exactly as written next to the parsed URL. Rendering and request
/// URIs use the written authority.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    url: Url,
    authority: String,
}

impl Location {
    pub(crate) fn new(url: Url, authority: impl Into<String>) -> Self {
        Self {
            url,
            authority: authority.into(),
        }
    }

    /// The parsed URL, credential segment included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `host[:port]` as written in the input.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Location scheme, never empty.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_location(self))
    }
}

// =============================================================================
// Gateway (endpoint identity)
// =============================================================================

/// A relay endpoint: where to reach it and which key it must sign with.
///
/// Only the parser can build one, so every `Gateway` in circulation has
/// a decoded, non-infinity key and a location with an HTTP-family scheme.
/// Serializes as its rendered string; deserializing runs the full parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Gateway {
    public_key: RelayPublicKey,
    location: Location,
}

impl Gateway {
    pub(crate) fn new(public_key: RelayPublicKey, location: Location) -> Self {
        Self {
            public_key,
            location,
        }
    }

    /// The key the relay is expected to sign with.
    pub fn public_key(&self) -> &RelayPublicKey {
        &self.public_key
    }

    /// The relay location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The full parsed URL, credential segment included.
    pub fn url(&self) -> &Url {
        self.location.url()
    }

    /// Location scheme, never empty.
    pub fn scheme(&self) -> &str {
        self.location.scheme()
    }

    /// `host[:port]` of the location, as written.
    pub fn host(&self) -> &str {
        self.location.authority()
    }

    /// Full request URI for an API path on this relay, without the
    /// credential segment.
    pub fn request_uri(&self, path: &str) -> String {
        join_request_uri(&self.location, path)
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}
