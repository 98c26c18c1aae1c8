//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::embedding::EmbeddingProvider;
use crate::feed::ArxivFeed;
use crate::storage::EmbeddingStore;

/// Dependencies handed to every request handler.
///
/// Built once at process start and cloned per request; handlers never reach
/// for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: Arc<ArxivFeed>,
    pub embeddings: Arc<dyn EmbeddingProvider>,
    pub store: Arc<dyn EmbeddingStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        feed: ArxivFeed,
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn EmbeddingStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            feed: Arc::new(feed),
            embeddings,
            store,
        }
    }
}
