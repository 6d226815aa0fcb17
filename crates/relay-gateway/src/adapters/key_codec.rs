//! # BLST Key Codec Adapter
//!
//! Implements `PublicKeyCodec` on top of the `blst` backed domain codec.

use crate::domain::bls;
use crate::domain::entities::RelayPublicKey;
use crate::domain::errors::KeyCodecError;
use crate::ports::outbound::PublicKeyCodec;

/// `blst` backed BLS12-381 G1 public key codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlstKeyCodec;

impl BlstKeyCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl PublicKeyCodec for BlstKeyCodec {
    fn decode(&self, hex: &str) -> Result<RelayPublicKey, KeyCodecError> {
        bls::decode_public_key_hex(hex)
    }

    fn is_point_at_infinity(&self, key: &RelayPublicKey) -> bool {
        bls::is_point_at_infinity(key)
    }
}
