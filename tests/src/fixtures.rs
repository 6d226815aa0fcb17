//! # Test Fixtures
//!
//! Deterministic BLS key material and logging setup shared by the suite.

use blst::min_pk::SecretKey;
use tracing_subscriber::EnvFilter;

/// Canonical compressed encoding of the G1 point-at-infinity.
pub const INFINITY_KEY_HEX: &str = "c00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

/// All-zero key, as produced by an unset key field.
pub const ZERO_KEY_HEX: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

/// Compressed public key bytes derived from a 32-byte seed.
pub fn public_key_from_seed(seed: [u8; 32]) -> [u8; 48] {
    let sk = SecretKey::key_gen(&seed, &[]).expect("32-byte IKM is always accepted");
    sk.sk_to_pk().to_bytes()
}

/// Lower-case hex of [`public_key_from_seed`].
pub fn public_key_hex(seed: u8) -> String {
    hex::encode(public_key_from_seed([seed; 32]))
}

/// Install a fmt subscriber honoring `RUST_LOG`. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_keys_are_deterministic() {
        assert_eq!(public_key_hex(7), public_key_hex(7));
        assert_ne!(public_key_hex(7), public_key_hex(8));
        assert_eq!(public_key_hex(7).len(), 96);
    }

    #[test]
    fn test_infinity_constants_are_full_length() {
        assert_eq!(INFINITY_KEY_HEX.len(), 96);
        assert_eq!(ZERO_KEY_HEX.len(), 96);
    }
}
