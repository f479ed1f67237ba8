// Shared helpers for retrieval results

use crate::types::RetrievedChunk;

/// Characters of content carried in a record preview.
const PREVIEW_LEN: usize = 100;

/// Fixed-length preview of chunk content for display and debug listings.
pub fn preview_of(content: &str) -> String {
    let prefix: String = content.chars().take(PREVIEW_LEN).collect();
    format!("{}...", prefix)
}

/// Formats retrieved chunks as the grounding-context block a downstream
/// chat collaborator hands to its language model. No model is invoked here.
pub fn format_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| format!("Document {}:\n{}", index + 1, chunk.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}
