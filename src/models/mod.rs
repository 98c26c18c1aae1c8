//! Core data models for paper listings and embeddings.

mod embedding;
mod paper;

pub use embedding::Embedding;
pub use paper::PaperRecord;
