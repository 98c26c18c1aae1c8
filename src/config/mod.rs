//! Configuration management.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feed lookup settings used by the listing endpoint
    #[serde(default)]
    pub feed: FeedConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Embedding API settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Key-value store settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Feed lookup settings.
///
/// The listing endpoint takes no request parameters; category and count come
/// from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// arXiv category filter
    #[serde(default = "default_category")]
    pub category: String,

    /// Number of papers per lookup
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            max_results: default_max_results(),
        }
    }
}

fn default_category() -> String {
    "cs.AI".to_string()
}

fn default_max_results() -> usize {
    10
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5001))
}

/// Embedding API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the embeddings API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Embedding model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to `OPENAI_API_KEY` when unset
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            api_key: default_api_key(),
        }
    }
}

fn default_api_base() -> String {
    crate::embedding::OPENAI_API_BASE.to_string()
}

fn default_model() -> String {
    crate::embedding::DEFAULT_MODEL.to_string()
}

fn default_api_key() -> Option<String> {
    std::env::var("OPENAI_API_KEY").ok()
}

/// Key-value store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store endpoint; unset selects the in-memory store
    #[serde(default)]
    pub base_url: Option<String>,

    /// Table/collection name
    #[serde(default = "default_table")]
    pub table: String,

    /// Optional bearer credential for the store
    #[serde(default)]
    pub credential: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            table: default_table(),
            credential: None,
        }
    }
}

fn default_table() -> String {
    "embeddings".to_string()
}

/// Load configuration from a file, with `ARXIV_EMBED_*` environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("ARXIV_EMBED").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}
