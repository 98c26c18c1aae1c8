//! Key-value persistence for embeddings.
//!
//! The store is a black box addressed by a single string key: each item is
//! the pair `embedding_id` / `embedding_data`, where the data half is an
//! opaque serialized blob. [`RestStore`] talks to an external service;
//! [`MemoryStore`] backs tests and dry runs.

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Embedding;

/// Errors that can occur during storage operations.
///
/// These stay typed internally even where the HTTP surface reports only a
/// generic failure message.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Store answered with a non-success status
    #[error("store returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The embedding could not be serialized into a blob
    #[error("failed to serialize embedding: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Injected failure from the in-memory store
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for embedding persistence backends
#[async_trait]
pub trait EmbeddingStore: Send + Sync {
    /// Persist one embedding under its id
    async fn put(&self, embedding: &Embedding) -> Result<(), StorageError>;
}
