//! arXiv feed client.
//!
//! [`ArxivFeed`] builds the listing query URL, fetches the raw Atom document
//! and parses it into [`crate::models::PaperRecord`] values in document
//! order. The client is stateless between calls; the only side effect is the
//! network fetch.

mod arxiv;

pub use arxiv::{ArxivFeed, ARXIV_API_URL};

use thiserror::Error;

/// Errors that can occur when talking to the feed service
#[derive(Debug, Error)]
pub enum FeedError {
    /// Feed service answered with a non-200 status
    #[error("feed request failed with status {status}")]
    RemoteFetch { status: u16 },

    /// Transport-level failure before any status was received
    #[error("network error: {0}")]
    Network(String),

    /// The response body is not a well-formed Atom document
    #[error("malformed feed: {0}")]
    MalformedFeed(String),

    /// An entry lacks a field required to construct a record.
    /// Parsing fails as a whole; malformed entries are not skipped.
    #[error("feed entry {entry} is missing required field `{field}`")]
    MissingField { entry: usize, field: &'static str },
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network(err.to_string())
    }
}
