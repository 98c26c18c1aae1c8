//! Embedding provider abstraction.
//!
//! This module defines the [`EmbeddingProvider`] trait for turning text into
//! fixed-length numeric vectors via an external service, plus the error
//! taxonomy shared by implementations.

mod openai;

pub use openai::{OpenAiProvider, DEFAULT_MODEL, OPENAI_API_BASE};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Embedding;

/// Errors that can occur when generating embeddings
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Embedding API answered with a non-success status
    #[error("embedding API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("failed to decode embedding response: {0}")]
    Parse(String),

    /// The response carried no embedding data
    #[error("embedding response contained no data")]
    EmptyResponse,
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(err: reqwest::Error) -> Self {
        EmbeddingError::Network(err.to_string())
    }
}

/// Trait for text embedding providers.
///
/// The trait is async to support API-based services; implementations must be
/// safe to share across request handlers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for the given text
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Model identifier used by this provider
    fn model_name(&self) -> &str;
}
