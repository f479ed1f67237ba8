// Retrieval service facade

use crate::config::RetrievalConfig;
use crate::engines::{engine_from_config, EngineKind, VectorEngine};
use crate::error::RagResult;
use crate::processors::chunking::SentenceChunker;
use crate::processors::embedding::HashEmbedder;
use crate::types::{RetrievedChunk, StoredChunk};
use crate::utils::preview_of;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry point for the retrieval core.
///
/// Owns the chunker, the embedder, and the vector engine picked at
/// construction. Hosts build one instance at process start and share it
/// across requests; the engine choice never changes afterwards.
pub struct RetrievalService {
    chunker: SentenceChunker,
    embedder: HashEmbedder,
    engine: Box<dyn VectorEngine>,
}

impl RetrievalService {
    pub fn new(config: RetrievalConfig) -> Self {
        let engine = engine_from_config(&config);
        Self {
            chunker: SentenceChunker::with_config(config.chunking),
            embedder: HashEmbedder::new(),
            engine,
        }
    }

    pub fn from_env() -> Self {
        Self::new(RetrievalConfig::from_env())
    }

    /// Engine picked at construction; fixed for the service lifetime.
    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Splits document text into retrieval units.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        self.chunker.chunk(text)
    }

    /// Embeds and persists a document's chunks under its owner.
    ///
    /// Chunks are embedded in order; the positional index goes into the
    /// record id and metadata. An empty chunk list is a successful no-op.
    pub async fn store_document(
        &self,
        owner_id: &str,
        document_id: &str,
        chunks: &[String],
    ) -> RagResult<()> {
        if chunks.is_empty() {
            tracing::debug!("No chunks to store for document {}", document_id);
            return Ok(());
        }

        tracing::info!(
            "Storing {} chunks for owner {}, document {}",
            chunks.len(),
            owner_id,
            document_id
        );

        let records: Vec<StoredChunk> = chunks
            .iter()
            .enumerate()
            .map(|(chunk_index, content)| StoredChunk {
                id: format!("{}-{}-{}", owner_id, document_id, chunk_index),
                vector: self.embedder.embed(content),
                owner_id: owner_id.to_string(),
                document_id: document_id.to_string(),
                chunk_index,
                content: content.clone(),
                preview: preview_of(content),
            })
            .collect();

        self.engine.store(records).await
    }

    /// Returns the owner's top-k chunks ranked against the query. An owner
    /// with nothing stored gets an empty list, not an error.
    pub async fn search(
        &self,
        owner_id: &str,
        query: &str,
        top_k: usize,
    ) -> RagResult<Vec<RetrievedChunk>> {
        let query_vector = self.embedder.embed(query);
        let results = self.engine.search(owner_id, &query_vector, top_k).await?;

        if results.is_empty() {
            tracing::warn!("No chunks matched for owner {}", owner_id);
        } else {
            tracing::debug!("Returning {} chunks for owner {}", results.len(), owner_id);
        }

        Ok(results)
    }

    /// Every chunk stored for the owner; debug and inspection only.
    pub async fn list_all(&self, owner_id: &str) -> RagResult<Vec<RetrievedChunk>> {
        self.engine.list_all(owner_id).await
    }

    /// Number of chunks visible for the owner.
    pub async fn count(&self, owner_id: &str) -> RagResult<usize> {
        self.engine.count(owner_id).await
    }

    /// Runs the chunk-and-embed pipeline on a fixed sample text and reports
    /// whether it produced usable output.
    pub async fn health_check(&self) -> ServiceHealth {
        let start_time = std::time::Instant::now();

        let sample = "This is the first sentence of the health probe. \
                      This second sentence carries enough text to produce an embedding.";
        let chunks = self.chunker.chunk(sample);
        let embeddings_ok = !chunks.is_empty()
            && chunks.iter().all(|chunk| {
                let vector = self.embedder.embed(chunk);
                vector.iter().any(|v| *v != 0.0)
            });

        if embeddings_ok {
            ServiceHealth {
                is_healthy: true,
                status: ServiceStatus::Healthy,
                engine: self.engine.kind(),
                error_message: None,
                response_time_ms: Some(start_time.elapsed().as_millis() as u64),
                last_check: Utc::now(),
            }
        } else {
            ServiceHealth {
                is_healthy: false,
                status: ServiceStatus::Error,
                engine: self.engine.kind(),
                error_message: Some("Sample text produced no usable chunks or embeddings".to_string()),
                response_time_ms: None,
                last_check: Utc::now(),
            }
        }
    }
}

/// Health snapshot for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub is_healthy: bool,
    pub status: ServiceStatus,
    pub engine: EngineKind,
    pub error_message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_check: DateTime<Utc>,
}

/// Service status enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    Healthy,
    Error,
}
