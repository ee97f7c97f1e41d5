//! Text embedding: pluggable, trait-based, so a model-backed embedder can replace
//! the placeholder without touching the pipeline.
//!
//! Default: `HashEmbedder`, a content-addressed placeholder. It is NOT a semantic
//! embedding; texts differing by a single character map to unrelated vectors.
//!
//! `ResumeParser` holds an `Arc<dyn TextEmbedder>`.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::models::EmbeddingVector;

/// Output width shared with all-MiniLM-L6-v2, the model this placeholder stands in for.
pub const EMBEDDING_DIMENSIONS: usize = 384;

const SEED_BYTES: usize = 4;
const STRIDE: u64 = 12_345;
const MODULUS: u64 = 10_000;

/// The embedder trait. Implementations must be deterministic and total: the same
/// text always yields the same vector, and embedding never fails.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    async fn embed(&self, text: &str) -> EmbeddingVector;

    fn dimensions(&self) -> usize;

    /// Backend label recorded on every `ParseResult`.
    fn name(&self) -> &str;
}

/// Deterministic stand-in for a learned embedding.
///
/// Algorithm:
/// 1. SHA-256 the UTF-8 text.
/// 2. seed = first 4 digest bytes as a big-endian integer (the first 8 hex digits).
/// 3. component i = ((seed + i * 12345) mod 10000) / 5000 - 1, in [-1, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn embed_sync(&self, text: &str) -> EmbeddingVector {
        let seed = seed_for(text);
        let half = (MODULUS / 2) as f32;
        (0..EMBEDDING_DIMENSIONS as u64)
            .map(|i| ((seed + i * STRIDE) % MODULUS) as f32 / half - 1.0)
            .collect()
    }
}

#[async_trait]
impl TextEmbedder for HashEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingVector {
        self.embed_sync(text)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }

    fn name(&self) -> &str {
        "hash-placeholder"
    }
}

fn seed_for(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; SEED_BYTES];
    prefix.copy_from_slice(&digest[..SEED_BYTES]);
    u64::from(u32::from_be_bytes(prefix))
}
