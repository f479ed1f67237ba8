// Text processing for the retrieval pipeline

pub mod chunking;
pub mod embedding;

pub use chunking::SentenceChunker;
pub use embedding::HashEmbedder;
