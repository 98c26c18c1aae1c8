//! In-memory store used by tests and dry runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Embedding;
use crate::storage::{EmbeddingStore, StorageError};

/// A store that keeps items in a process-local map.
///
/// [`MemoryStore::fail_with`] flips it into a failing mode so the error path
/// of the embedding endpoint can be exercised without a real backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    failure: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        let mut guard = self.failure.lock().unwrap();
        *guard = Some(message.into());
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a stored blob by id
    pub fn get(&self, id: &str) -> Option<String> {
        self.items.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl EmbeddingStore for MemoryStore {
    async fn put(&self, embedding: &Embedding) -> Result<(), StorageError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(StorageError::Unavailable(message));
        }

        let blob = embedding.to_blob()?;
        self.items
            .lock()
            .unwrap()
            .insert(embedding.id.clone(), blob);
        Ok(())
    }
}
