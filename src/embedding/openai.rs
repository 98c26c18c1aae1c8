//! OpenAI-compatible embedding API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::models::Embedding;
use crate::utils::HttpClient;

/// Default API base for the embeddings endpoint
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
/// Default embedding model
pub const DEFAULT_MODEL: &str = "text-embedding-ada-002";

/// Embedding provider backed by the OpenAI embeddings API
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Arc<HttpClient>,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider against the public OpenAI API with the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENAI_API_BASE, api_key, DEFAULT_MODEL)
    }

    /// Create with a custom base URL and model (for testing or proxies)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Deterministic store key for an input text.
    ///
    /// The embeddings API reports no per-item identifier, so the key is
    /// derived from the input itself.
    pub fn embedding_id(text: &str) -> String {
        format!("{:x}", md5::compute(text))
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    input: [&'a str; 1],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let url = format!("{}/embeddings", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                input: [text],
                model: &self.model,
            })
            .send()
            .await
            .map_err(|e| {
                EmbeddingError::Network(format!("failed to reach embedding API: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api { status, message });
        }

        let body: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Parse(e.to_string()))?;

        let vector = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbeddingError::EmptyResponse)?;

        Ok(Embedding {
            id: Self::embedding_id(text),
            vector,
            model: self.model.clone(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
