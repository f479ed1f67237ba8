// Vector engine implementations

pub mod memory;
pub mod remote;

pub use memory::MemoryVectorEngine;
pub use remote::RemoteVectorEngine;

use crate::config::RetrievalConfig;
use crate::error::RagResult;
use crate::types::{RetrievedChunk, StoredChunk};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Engine variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "memory")]
    Memory,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Remote => write!(f, "remote"),
            EngineKind::Memory => write!(f, "memory"),
        }
    }
}

/// Capability interface over vector storage.
///
/// One engine is constructed per process from configuration and never
/// replaced at runtime; call sites hold `dyn VectorEngine` and never branch
/// on the concrete type.
#[async_trait]
pub trait VectorEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Persists records in order. A failed remote batch aborts the whole
    /// operation; batches after it are never attempted. An empty record set
    /// is a successful no-op.
    async fn store(&self, records: Vec<StoredChunk>) -> RagResult<()>;

    /// Returns the owner's top-k records ranked by similarity to the query
    /// vector. An owner with no records yields an empty list, not an error.
    async fn search(
        &self,
        owner_id: &str,
        query_vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedChunk>>;

    /// Debug listing of the records stored for the owner.
    async fn list_all(&self, owner_id: &str) -> RagResult<Vec<RetrievedChunk>>;

    /// Number of records visible for the owner.
    async fn count(&self, owner_id: &str) -> RagResult<usize>;
}

/// Builds the engine dictated by configuration: the hosted index when
/// credentials are present, the in-process engine otherwise.
pub fn engine_from_config(config: &RetrievalConfig) -> Box<dyn VectorEngine> {
    match &config.remote {
        Some(remote) => {
            tracing::info!("Remote vector index configured at {}", remote.base_url);
            Box::new(RemoteVectorEngine::new(remote.clone()))
        }
        None => {
            tracing::info!("Remote vector index credentials missing, using in-memory engine");
            Box::new(MemoryVectorEngine::new())
        }
    }
}
