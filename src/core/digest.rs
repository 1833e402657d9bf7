//! SHA3-256 hashing helpers.

use crate::core::types::{Hash256, HASH_LEN};
use sha3::{Digest, Sha3_256};

/// Compute SHA3-256 over a single byte slice.
pub fn sha3_256(data: &[u8]) -> Hash256 {
    sha3_256_multi(&[data])
}

/// Compute SHA3-256 over the concatenation of several byte slices.
///
/// Equivalent to hashing the joined buffer, without allocating it.
pub fn sha3_256_multi(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&hasher.finalize());
    Hash256::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_known_vector() {
        // SHA3-256("")
        let hash = sha3_256(b"");
        assert_eq!(
            hash.to_hex(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_multi_equals_concatenation() {
        let joined = sha3_256(b"1helloworld");
        let parts = sha3_256_multi(&[b"1", b"hello", b"", b"world"]);
        assert_eq!(joined, parts);
    }

    #[test]
    fn test_different_input_different_hash() {
        assert_ne!(sha3_256(b"a"), sha3_256(b"b"));
    }
}
