//! # Gateway Errors
//!
//! Error types for relay endpoint parsing. Every rejection path of the
//! parser has its own variant so callers can tell a missing key from a
//! broken one without string matching.

use thiserror::Error;

/// Errors returned when parsing a relay address into a [`Gateway`].
///
/// [`Gateway`]: super::entities::Gateway
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The address is not a valid URI after scheme normalization
    #[error("Malformed relay address: {0}")]
    MalformedAddress(String),

    /// The address has no `pubkey@` credential segment
    #[error("Missing relay public key")]
    MissingPublicKey,

    /// The credential segment is not a hex-encoded compressed public key
    #[error("Invalid relay public key encoding: {0}")]
    InvalidPublicKeyEncoding(#[from] KeyCodecError),

    /// The credential decodes to the G1 point-at-infinity
    #[error("Relay public key is the point-at-infinity")]
    PointAtInfinityPublicKey,
}

/// Errors from decoding a hex-encoded BLS12-381 public key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyCodecError {
    /// Input is not valid hexadecimal
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match a compressed G1 point
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Bytes do not encode a valid point in the G1 subgroup
    #[error("invalid curve point: {0}")]
    InvalidCurvePoint(String),
}

/// Parser configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration text could not be parsed
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Default scheme is not part of the HTTP family
    #[error("Unsupported default scheme: {0} (expected http or https)")]
    UnsupportedScheme(String),
}
