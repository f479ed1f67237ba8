// Sentence-based text chunking

use crate::config::ChunkingConfig;

/// Splits raw document text into bounded-size retrieval units.
///
/// Sentences are accumulated greedily until the target size is reached, so
/// chunks end on sentence boundaries. A sentence longer than the target
/// stands alone in its own chunk. Text with no usable sentence split falls
/// back to fixed word windows. Pure and deterministic; no side effects.
#[derive(Debug, Clone, Default)]
pub struct SentenceChunker {
    config: ChunkingConfig,
}

impl SentenceChunker {
    pub fn new() -> Self {
        Self {
            config: ChunkingConfig::default(),
        }
    }

    pub fn with_config(config: ChunkingConfig) -> Self {
        Self { config }
    }

    /// Chunks `text`, dropping any chunk at or below the minimum length.
    /// Empty input yields an empty sequence.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();

        for sentence in sentences {
            if current.len() + sentence.len() > self.config.target_size && !current.is_empty() {
                chunks.push(std::mem::replace(&mut current, sentence.to_string()));
            } else if current.is_empty() {
                current = sentence.to_string();
            } else {
                current.push_str(". ");
                current.push_str(sentence);
            }
        }

        if !current.trim().is_empty() {
            chunks.push(current);
        }

        // No sentence structure at all: fixed word windows instead
        if chunks.is_empty() {
            chunks = self.word_windows(text);
        }

        chunks
            .into_iter()
            .filter(|chunk| chunk.trim().len() > self.config.min_chunk_len)
            .collect()
    }

    fn word_windows(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.config.fallback_window_words)
            .map(|window| window.join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker_with_target(target_size: usize) -> SentenceChunker {
        SentenceChunker::with_config(ChunkingConfig {
            target_size,
            ..ChunkingConfig::default()
        })
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = SentenceChunker::new();
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("   \n\t ").is_empty());
    }

    #[test]
    fn test_short_sentences_merge_into_one_chunk() {
        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk("The cat sat on the mat. Dogs bark loudly at night.");
        assert_eq!(
            chunks,
            vec!["The cat sat on the mat. Dogs bark loudly at night".to_string()]
        );
    }

    #[test]
    fn test_tiny_merged_chunk_is_filtered() {
        // "A. B. C." merges to "A. B. C" (7 chars), below the minimum length
        let chunker = SentenceChunker::new();
        assert!(chunker.chunk("A. B. C.").is_empty());
    }

    #[test]
    fn test_target_size_bounds_chunks() {
        let chunker = chunker_with_target(60);
        let text = "The first sentence talks about storage engines. \
                    The second sentence talks about embeddings. \
                    The third sentence talks about ranking quality.";
        let chunks = chunker.chunk(text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= 60, "chunk too long: {:?}", chunk);
        }
    }

    #[test]
    fn test_oversize_sentence_stands_alone() {
        let chunker = chunker_with_target(20);
        let text = "Short one here. This single sentence is far longer than the target size. Short two here.";
        let chunks = chunker.chunk(text);
        assert!(chunks
            .iter()
            .any(|c| c == "This single sentence is far longer than the target size"));
    }

    #[test]
    fn test_all_sentences_survive_chunking() {
        let chunker = chunker_with_target(80);
        let sentences = [
            "Alpha works on document ingestion",
            "Beta handles the embedding pipeline",
            "Gamma ranks candidate chunks",
            "Delta renders answers for users",
        ];
        let text = sentences.join(". ") + ".";
        let chunks = chunker.chunk(&text);
        let rejoined = chunks.join(". ");
        for sentence in sentences {
            assert!(rejoined.contains(sentence), "lost sentence: {}", sentence);
        }
    }

    #[test]
    fn test_word_window_fallback_without_sentences() {
        // Terminator-only "words" produce no sentences, so the word-window
        // path is taken
        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk("... ... ... ...");
        assert_eq!(chunks, vec!["... ... ... ...".to_string()]);
    }

    #[test]
    fn test_word_window_fallback_splits_long_input() {
        let chunker = SentenceChunker::with_config(ChunkingConfig {
            fallback_window_words: 3,
            ..ChunkingConfig::default()
        });
        let chunks = chunker.chunk("... ... ... ... ... ...");
        assert_eq!(
            chunks,
            vec!["... ... ...".to_string(), "... ... ...".to_string()]
        );
    }
}
