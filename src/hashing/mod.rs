//! Cache key derivation.
//!
//! Keys are BLAKE3 digests over the normalized message and a fingerprint of
//! the conversation history, so equivalent requests share one cache slot.

use blake3::Hasher;

/// Lower-cases, trims, and collapses internal whitespace runs to one space.
pub fn normalize_query(message: &str) -> String {
    message
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Order-sensitive fingerprint of `(role, content)` pairs. Empty history is `0`.
pub fn hash_history<'a, I>(turns: I) -> u64
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut hasher = Hasher::new();
    let mut any = false;
    for (role, content) in turns {
        any = true;
        hasher.update(&(role.len() as u64).to_le_bytes());
        hasher.update(role.as_bytes());
        hasher.update(&(content.len() as u64).to_le_bytes());
        hasher.update(content.as_bytes());
    }

    if any {
        digest_prefix(&hasher.finalize())
    } else {
        0
    }
}

/// Hex cache key for a message under a history fingerprint.
pub fn cache_key(message: &str, history_fingerprint: u64) -> String {
    let mut hasher = Hasher::new();
    hasher.update(normalize_query(message).as_bytes());
    hasher.update(b"|");
    hasher.update(&history_fingerprint.to_le_bytes());
    hasher.finalize().to_hex().to_string()
}

/// First 64 bits of `hash`, little-endian.
#[inline]
fn digest_prefix(hash: &blake3::Hash) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
