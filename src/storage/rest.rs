//! REST key-value store client.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::models::Embedding;
use crate::storage::{EmbeddingStore, StorageError};
use crate::utils::HttpClient;

/// Key-value store addressed as `PUT {base}/{table}/{embedding_id}`.
///
/// The item body mirrors the put-item layout of the original deployment:
/// the key under `embedding_id` and the serialized blob under
/// `embedding_data`.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Arc<HttpClient>,
    base_url: String,
    table: String,
    credential: Option<String>,
}

impl RestStore {
    /// Create a store client for the given endpoint and table
    pub fn new(
        base_url: impl Into<String>,
        table: impl Into<String>,
        credential: Option<String>,
    ) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
            table: table.into(),
            credential,
        }
    }
}

#[async_trait]
impl EmbeddingStore for RestStore {
    async fn put(&self, embedding: &Embedding) -> Result<(), StorageError> {
        let url = format!("{}/{}/{}", self.base_url, self.table, embedding.id);
        let item = json!({
            "embedding_id": embedding.id,
            "embedding_data": embedding.to_blob()?,
        });

        let mut request = self.client.put(&url).json(&item);
        if let Some(credential) = &self.credential {
            request = request.bearer_auth(credential);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Network(format!("failed to reach store: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api { status, message });
        }

        Ok(())
    }
}
