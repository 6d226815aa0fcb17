//! # BLS12-381 Public Key Codec
//!
//! Pure domain logic for turning hex text into a relay public key.
//!
//! ## Notes
//!
//! Relay keys are G1 points (48 bytes compressed), the `min_pk` variant
//! used by the Ethereum builder API. Two encodings are treated as the
//! point-at-infinity: the canonical compressed form (`0xc0` followed by
//! zeros) and the all-zero string that an unset key serializes to. Both
//! decode successfully so the caller can reject them with a dedicated
//! error; every other encoding must pass `blst` key validation.

use super::entities::{RelayPublicKey, PUBLIC_KEY_LENGTH};
use super::errors::KeyCodecError;
use blst::min_pk::PublicKey;

/// Compression flag and infinity flag set, as in the canonical encoding.
const COMPRESSED_INFINITY_TAG: u8 = 0xc0;

/// Decode a bare (unprefixed) hex string into a relay public key.
///
/// # Errors
/// * `InvalidHex` if the text is not hexadecimal
/// * `InvalidLength` if it does not decode to 48 bytes
/// * `InvalidCurvePoint` if the bytes are not a valid G1 subgroup point
pub fn decode_public_key_hex(text: &str) -> Result<RelayPublicKey, KeyCodecError> {
    let decoded = hex::decode(text).map_err(|e| KeyCodecError::InvalidHex(e.to_string()))?;

    let bytes: [u8; PUBLIC_KEY_LENGTH] = decoded.as_slice().try_into().map_err(|_| {
        KeyCodecError::InvalidLength {
            expected: PUBLIC_KEY_LENGTH,
            actual: decoded.len(),
        }
    })?;

    if !is_infinity_encoding(&bytes) {
        // Checks compression flags, curve membership and subgroup.
        PublicKey::key_validate(&bytes)
            .map_err(|e| KeyCodecError::InvalidCurvePoint(format!("{e:?}")))?;
    }

    Ok(RelayPublicKey::from_bytes(bytes))
}

/// Strip an optional `0x`/`0X` prefix from hex text.
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Check whether a key is the G1 point-at-infinity.
pub fn is_point_at_infinity(key: &RelayPublicKey) -> bool {
    is_infinity_encoding(key.as_bytes())
}

fn is_infinity_encoding(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> bool {
    let (tag, rest) = (bytes[0], &bytes[1..]);
    (tag == 0 || tag == COMPRESSED_INFINITY_TAG) && rest.iter().all(|b| *b == 0)
}
