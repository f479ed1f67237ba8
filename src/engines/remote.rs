// Remote vector index engine

use super::{EngineKind, VectorEngine};
use crate::config::RemoteIndexConfig;
use crate::error::{RagError, RagResult};
use crate::processors::embedding::EMBEDDING_DIMENSION;
use crate::types::{RetrievedChunk, StoredChunk};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Upserts go to the index in slices of this size to stay inside provider
/// rate limits.
const UPSERT_BATCH_SIZE: usize = 10;

/// Breadth of the single approximate query behind `list_all`.
const LIST_QUERY_TOP_K: usize = 100;

/// Engine backed by a hosted vector index speaking a REST upsert/query
/// protocol with bearer-token auth.
pub struct RemoteVectorEngine {
    http: reqwest::Client,
    config: RemoteIndexConfig,
}

/// Wire record for one upserted vector.
#[derive(Debug, Serialize)]
struct UpsertVector<'a> {
    id: &'a str,
    vector: &'a [f32],
    metadata: RecordMetadata<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordMetadata<'a> {
    owner_id: &'a str,
    document_id: &'a str,
    chunk_index: usize,
    content: &'a str,
    preview: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<QueryHit>,
}

#[derive(Debug, Deserialize)]
struct QueryHit {
    #[allow(dead_code)]
    id: String,
    #[allow(dead_code)]
    score: f32,
    metadata: Option<HitMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HitMetadata {
    owner_id: String,
    document_id: String,
    content: String,
    preview: String,
}

impl RemoteVectorEngine {
    pub fn new(config: RemoteIndexConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<String>,
    ) -> RagResult<Vec<QueryHit>> {
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
            filter,
        };

        let response = self
            .http
            .post(self.endpoint("query"))
            .bearer_auth(&self.config.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RagError::InvalidResponse(format!(
                "query returned {}",
                response.status()
            )));
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.result)
    }
}

#[async_trait]
impl VectorEngine for RemoteVectorEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Remote
    }

    async fn store(&self, records: Vec<StoredChunk>) -> RagResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let total_batches = records.len().div_ceil(UPSERT_BATCH_SIZE);

        // Batches are awaited in order: if batch N fails, batches after N
        // are never sent.
        for (batch_index, batch) in records.chunks(UPSERT_BATCH_SIZE).enumerate() {
            let payload: Vec<UpsertVector> = batch
                .iter()
                .map(|record| UpsertVector {
                    id: &record.id,
                    vector: &record.vector,
                    metadata: RecordMetadata {
                        owner_id: &record.owner_id,
                        document_id: &record.document_id,
                        chunk_index: record.chunk_index,
                        content: &record.content,
                        preview: &record.preview,
                    },
                })
                .collect();

            let response = self
                .http
                .post(self.endpoint("upsert"))
                .bearer_auth(&self.config.token)
                .json(&payload)
                .send()
                .await?;

            if !response.status().is_success() {
                tracing::error!(
                    "Upsert batch {}/{} rejected with status {}",
                    batch_index + 1,
                    total_batches,
                    response.status()
                );
                return Err(RagError::BatchRejected {
                    batch: batch_index,
                    status: response.status(),
                });
            }

            tracing::debug!("Stored batch {}/{}", batch_index + 1, total_batches);
        }

        Ok(())
    }

    async fn search(
        &self,
        owner_id: &str,
        query_vector: &[f32],
        top_k: usize,
    ) -> RagResult<Vec<RetrievedChunk>> {
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let filter = Some(format!("ownerId = '{}'", owner_id));
        let hits = self.query(query_vector, top_k, filter).await?;

        // The server-side filter is authoritative; the local check keeps
        // owner isolation independent of index configuration.
        Ok(hits
            .into_iter()
            .filter_map(|hit| hit.metadata)
            .filter(|metadata| metadata.owner_id == owner_id)
            .map(|metadata| RetrievedChunk {
                content: metadata.content,
                document_id: metadata.document_id,
                preview: metadata.preview,
            })
            .collect())
    }

    /// Lists via one broad approximate query; the index has no native
    /// exhaustive scan. Records beyond the first `LIST_QUERY_TOP_K` global
    /// hits are not reported, so this is a debug aid, not a correctness
    /// surface.
    async fn list_all(&self, owner_id: &str) -> RagResult<Vec<RetrievedChunk>> {
        let probe = vec![0.1f32; EMBEDDING_DIMENSION];
        let hits = self.query(&probe, LIST_QUERY_TOP_K, None).await?;

        Ok(hits
            .into_iter()
            .filter_map(|hit| hit.metadata)
            .filter(|metadata| metadata.owner_id == owner_id)
            .map(|metadata| RetrievedChunk {
                content: metadata.content,
                document_id: metadata.document_id,
                preview: metadata.preview,
            })
            .collect())
    }

    async fn count(&self, owner_id: &str) -> RagResult<usize> {
        Ok(self.list_all(owner_id).await?.len())
    }
}
