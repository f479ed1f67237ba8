// Configuration for the retrieval core

use serde::{Deserialize, Serialize};

/// Chunking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters. A single sentence longer than this
    /// is kept whole rather than split mid-sentence.
    pub target_size: usize,
    /// Chunks whose trimmed length is at or below this are discarded.
    pub min_chunk_len: usize,
    /// Window width, in words, for the no-sentence-structure fallback.
    pub fallback_window_words: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            target_size: 500,
            min_chunk_len: 10,
            fallback_window_words: 100,
        }
    }
}

/// Credentials for the hosted vector index.
#[derive(Debug, Clone)]
pub struct RemoteIndexConfig {
    pub base_url: String,
    pub token: String,
}

/// Top-level configuration for building a `RetrievalService`.
///
/// Engine selection is decided here once: `remote` present selects the
/// hosted index, absent selects the in-process engine. Nothing switches
/// engines after construction.
#[derive(Debug, Clone, Default)]
pub struct RetrievalConfig {
    pub remote: Option<RemoteIndexConfig>,
    pub chunking: ChunkingConfig,
}

impl RetrievalConfig {
    /// Reads configuration from the environment.
    ///
    /// `RAGKIT_VECTOR_URL` and `RAGKIT_VECTOR_TOKEN` must both be set and
    /// non-empty for the remote engine; otherwise the in-process engine is
    /// used.
    pub fn from_env() -> Self {
        let remote = match (
            std::env::var("RAGKIT_VECTOR_URL"),
            std::env::var("RAGKIT_VECTOR_TOKEN"),
        ) {
            (Ok(base_url), Ok(token)) if !base_url.is_empty() && !token.is_empty() => {
                Some(RemoteIndexConfig { base_url, token })
            }
            _ => None,
        };

        Self {
            remote,
            chunking: ChunkingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunking_config() {
        let config = ChunkingConfig::default();
        assert_eq!(config.target_size, 500);
        assert_eq!(config.min_chunk_len, 10);
        assert_eq!(config.fallback_window_words, 100);
    }

    #[test]
    fn test_default_retrieval_config_has_no_remote() {
        let config = RetrievalConfig::default();
        assert!(config.remote.is_none());
    }
}
