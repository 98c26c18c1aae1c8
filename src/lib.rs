//! # arxiv-embed
//!
//! An HTTP service and companion CLI for fetching paper listings from the
//! arXiv Atom feed, computing text embeddings through an external embedding
//! API, and persisting those embeddings to a key-value store.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures ([`PaperRecord`], [`Embedding`])
//! - [`feed`]: arXiv feed client (query construction, fetch, Atom parsing)
//! - [`embedding`]: Embedding provider abstraction and OpenAI implementation
//! - [`storage`]: Key-value persistence for embeddings
//! - [`server`]: axum HTTP surface and application state
//! - [`config`]: Configuration management
//! - [`utils`]: Shared HTTP client

pub mod config;
pub mod embedding;
pub mod feed;
pub mod models;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use feed::ArxivFeed;
pub use models::{Embedding, PaperRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
