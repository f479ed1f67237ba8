// Retrieval core: chunking, embeddings, and per-owner similarity search
// over uploaded documents

pub mod config;
pub mod engines;
pub mod error;
pub mod processors;
pub mod service;
pub mod similarity;
pub mod types;
pub mod utils;

// Re-export the public surface
pub use config::{ChunkingConfig, RemoteIndexConfig, RetrievalConfig};
pub use engines::{EngineKind, MemoryVectorEngine, RemoteVectorEngine, VectorEngine};
pub use error::{RagError, RagResult};
pub use processors::chunking::SentenceChunker;
pub use processors::embedding::{token_hash, HashEmbedder, EMBEDDING_DIMENSION};
pub use service::{RetrievalService, ServiceHealth, ServiceStatus};
pub use types::{RetrievedChunk, StoredChunk};
pub use utils::{format_context, preview_of};
