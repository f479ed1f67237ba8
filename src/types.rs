// Record and result types for the retrieval core

use serde::{Deserialize, Serialize};

/// A chunk persisted in a vector engine. Immutable once stored; deleted only
/// as a side effect of external document deletion, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChunk {
    pub id: String,
    pub vector: Vec<f32>,
    pub owner_id: String,
    pub document_id: String,
    pub chunk_index: usize,
    pub content: String,
    pub preview: String,
}

/// What search and list_all return. Raw vectors never leave the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub content: String,
    pub document_id: String,
    pub preview: String,
}

impl From<&StoredChunk> for RetrievedChunk {
    fn from(record: &StoredChunk) -> Self {
        Self {
            content: record.content.clone(),
            document_id: record.document_id.clone(),
            preview: record.preview.clone(),
        }
    }
}
