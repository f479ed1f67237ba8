// In-process fallback vector engine

use super::{EngineKind, VectorEngine};
use crate::error::RagResult;
use crate::similarity;
use crate::types::{RetrievedChunk, StoredChunk};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Non-persistent engine backed by an owner-keyed map.
///
/// Holds every record for the process lifetime. Appends take the write
/// lock, so concurrent store calls serialize instead of losing records.
/// Keying by owner makes cross-owner leakage impossible by construction.
#[derive(Default)]
pub struct MemoryVectorEngine {
    records: RwLock<HashMap<String, Vec<StoredChunk>>>,
}

impl MemoryVectorEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorEngine for MemoryVectorEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Memory
    }

    async fn store(&self, records: Vec<StoredChunk>) -> RagResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let count = records.len();
        let mut map = self.records.write();
        for record in records {
            map.entry(record.owner_id.clone()).or_default().push(record);
        }

        tracing::debug!("Stored {} records in the in-memory engine", count);
        Ok(())
    }

    async fn search(
        &self,
        owner_id: &str,
        query_vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedChunk>> {
        let map = self.records.read();
        let Some(owned) = map.get(owner_id) else {
            return Ok(Vec::new());
        };

        let candidates: Vec<(RetrievedChunk, Vec<f32>)> = owned
            .iter()
            .map(|record| (RetrievedChunk::from(record), record.vector.clone()))
            .collect();

        let ranked = similarity::rank(query_vector, candidates);
        Ok(similarity::top_k(ranked, top_k)
            .into_iter()
            .map(|(chunk, _)| chunk)
            .collect())
    }

    async fn list_all(&self, owner_id: &str) -> RagResult<Vec<RetrievedChunk>> {
        let map = self.records.read();
        Ok(map
            .get(owner_id)
            .map(|owned| owned.iter().map(RetrievedChunk::from).collect())
            .unwrap_or_default())
    }

    async fn count(&self, owner_id: &str) -> RagResult<usize> {
        let map = self.records.read();
        Ok(map.get(owner_id).map(Vec::len).unwrap_or(0))
    }
}
