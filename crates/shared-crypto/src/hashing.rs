//! # Keccak-256 Hashing
//!
//! The legacy Keccak padding (not NIST SHA3-256), as used by Ethereum-style
//! headers and tries.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Stateful Keccak-256 hasher.
pub struct Keccak256Hasher {
    inner: Keccak256,
}

impl Keccak256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Keccak256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

impl Default for Keccak256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash the concatenation of several byte strings, in order.
///
/// Equivalent to `keccak256(&parts.concat())` without the intermediate buffer.
pub fn keccak256_concat<I, B>(parts: I) -> Hash
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut hasher = Keccak256Hasher::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::EMPTY_TRIE_ROOT;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_of_empty_rlp_is_empty_trie_root() {
        assert_eq!(keccak256(&[0x80]), EMPTY_TRIE_ROOT);
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let mut hasher = Keccak256Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), keccak256(b"hello world"));
    }

    #[test]
    fn test_concat_matches_joined_input() {
        let parts: Vec<Vec<u8>> = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(keccak256_concat(&parts), keccak256(&[1, 2, 3]));
        assert_eq!(keccak256_concat(Vec::<Vec<u8>>::new()), keccak256(b""));
    }
}
