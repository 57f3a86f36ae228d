//! BLAKE3 helpers for annotation cache keys and stub-vector seeds.

/// Full 256-bit hash of a sentence, used as the annotation cache key.
#[inline]
pub fn hash_sentence(sentence: &str) -> [u8; 32] {
    *blake3::hash(sentence.as_bytes()).as_bytes()
}

/// First 64 bits of the BLAKE3 hash of `data`.
///
/// Only used to seed deterministic pseudo-random streams, so truncation
/// collisions merely make two stub vectors identical.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_sentence_determinism() {
        let sentence = "The cat sat on the mat.";

        let hash1 = hash_sentence(sentence);
        let hash2 = hash_sentence(sentence);

        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_sentence_uniqueness() {
        let sentences = [
            "The cat sat on the mat.",
            "the cat sat on the mat.",
            "The cat sat on the mat. ",
            "The cat sat on a mat.",
        ];

        let hashes: HashSet<_> = sentences.iter().map(|s| hash_sentence(s)).collect();
        assert_eq!(hashes.len(), sentences.len());
    }

    #[test]
    fn test_hash_to_u64_matches_prefix() {
        let data = b"cat";
        let full = blake3::hash(data);
        let expected = u64::from_le_bytes(full.as_bytes()[..8].try_into().unwrap());

        assert_eq!(hash_to_u64(data), expected);
    }

    #[test]
    fn test_hash_to_u64_empty_input() {
        assert_ne!(hash_to_u64(b""), 0);
    }
}
