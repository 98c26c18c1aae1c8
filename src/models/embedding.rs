//! Embedding vector record.

use serde::{Deserialize, Serialize};

/// A computed text embedding together with its persistence identifier.
///
/// The core never interprets the vector's contents; it only moves it from
/// the embedding API to the key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Store key; derived as the md5 hex digest of the input text
    pub id: String,

    /// Embedding vector
    pub vector: Vec<f32>,

    /// Model that produced the vector
    pub model: String,
}

impl Embedding {
    /// Serialize to the blob layout persisted as `embedding_data`.
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
