// Hash-bucket embedding generation

use std::collections::HashMap;

/// Embedding dimension shared by every engine and every stored record.
pub const EMBEDDING_DIMENSION: usize = 1536;

/// Deterministic 32-bit hash of a token.
///
/// Accumulates character codes with `h = (h << 5) - h + code` under wrapping
/// 32-bit arithmetic and takes the absolute value. Stable across runs and
/// platforms; the empty string hashes to 0.
pub fn token_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in s.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Dependency-free embedding generator.
///
/// Tokens are hashed into buckets of a fixed-width vector, weighted by
/// character codes, in-text frequency, and sequence position. Collisions are
/// expected; the vectors are only meant for coarse relevance ranking, and
/// identical input always produces a bit-identical vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn new() -> Self {
        Self
    }

    /// Embeds a chunk or query string into a unit-normalized vector.
    ///
    /// Returns the all-zero vector when no token survives filtering; callers
    /// rank such vectors at similarity 0 rather than treating this as an
    /// error.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; EMBEDDING_DIMENSION];

        // 1. Normalize: lowercase, non-word characters become spaces
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        // 2. Tokenize, dropping very short tokens
        let words: Vec<&str> = normalized
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .collect();

        // 3. Per-token frequency within this text
        let mut frequencies: HashMap<&str, u32> = HashMap::new();
        for word in &words {
            *frequencies.entry(word).or_insert(0) += 1;
        }

        // 4. Accumulate character codes into hash-addressed buckets
        for (index, word) in words.iter().enumerate() {
            let word_hash = token_hash(word) as usize;
            let freq = frequencies[word] as f32;
            let position_weight = 1.0 + index as f32 * 0.01;

            for (i, c) in word.chars().take(10).enumerate() {
                let pos = (word_hash + i) % EMBEDDING_DIMENSION;
                vector[pos] += c as u32 as f32 * freq * position_weight;
            }
        }

        // 5. Unit-normalize unless the vector carries no signal
        let magnitude = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_hash_known_values() {
        assert_eq!(token_hash(""), 0);
        assert_eq!(token_hash("abc"), 96354);
    }

    #[test]
    fn test_token_hash_is_deterministic() {
        assert_eq!(token_hash("retrieval"), token_hash("retrieval"));
        assert_ne!(token_hash("cat"), token_hash("dog"));
    }

    #[test]
    fn test_embed_is_deterministic() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("The cat sat on the mat.");
        let b = embedder.embed("The cat sat on the mat.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_is_unit_normalized() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("Documents are split into retrievable chunks.");
        let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_embed_without_surviving_tokens_is_zero() {
        let embedder = HashEmbedder::new();
        // Every token has length <= 2 and is filtered out
        let vector = embedder.embed("a b to of it");
        assert_eq!(vector.len(), EMBEDDING_DIMENSION);
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_embed_empty_input_is_zero() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("");
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_embed_is_frequency_sensitive() {
        let embedder = HashEmbedder::new();
        let once = embedder.embed("cat dog");
        let repeated = embedder.embed("cat cat dog");
        assert_ne!(once, repeated);
    }

    #[test]
    fn test_embed_is_order_sensitive() {
        let embedder = HashEmbedder::new();
        let forward = embedder.embed("cat dog bird");
        let reversed = embedder.embed("bird dog cat");
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_punctuation_does_not_change_tokens() {
        let embedder = HashEmbedder::new();
        let plain = embedder.embed("cat mat");
        let punctuated = embedder.embed("cat, mat!");
        assert_eq!(plain, punctuated);
    }
}
