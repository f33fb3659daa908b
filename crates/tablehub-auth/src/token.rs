//! Opaque session token codec.
//!
//! Tokens are 20 CSPRNG bytes (160 bits of entropy) encoded as lowercase
//! base32 without padding, giving a 32-character URL-safe string. Only the
//! SHA-256 digest of a token is ever persisted.

use base32::Alphabet;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Number of random bytes per token.
const TOKEN_BYTES: usize = 20;

/// Generate a new random session token.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base32::encode(Alphabet::Rfc4648Lower { padding: false }, &bytes)
}

/// Derive the deterministic lookup key for a token: lowercase hex SHA-256.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
