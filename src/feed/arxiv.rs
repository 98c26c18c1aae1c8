//! arXiv Atom feed client implementation.

use feed_rs::parser;
use std::sync::Arc;

use crate::feed::FeedError;
use crate::models::PaperRecord;
use crate::utils::HttpClient;

/// Base URL for the arXiv query API
pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// Client for the arXiv listing feed.
///
/// Produces the newest papers in a category, in the order the feed reports
/// them (newest-first, per the query's sort parameters).
#[derive(Debug, Clone)]
pub struct ArxivFeed {
    client: Arc<HttpClient>,
    base_url: String,
}

impl ArxivFeed {
    /// Create a client against the public arXiv API
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_API_URL)
    }

    /// Create with a custom base URL (for testing against a stub server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
        }
    }

    /// Build the listing query URL for a category.
    ///
    /// Sort field and order are fixed: submission date, descending. Neither
    /// `category` syntax nor the `max_results` range is validated here; the
    /// remote service interprets both.
    pub fn query_url(&self, category: &str, max_results: usize) -> String {
        format!(
            "{}?search_query=cat:{}&max_results={}&sortBy=submittedDate&sortOrder=descending",
            self.base_url,
            urlencoding::encode(category),
            max_results,
        )
    }

    /// Fetch the raw Atom document.
    ///
    /// A single GET with no retry; timeouts are the shared client defaults.
    /// Any non-200 status fails with the exact code.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| FeedError::Network(format!("failed to fetch feed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FeedError::RemoteFetch {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Parse an Atom document into paper records, in document order.
    pub fn parse(&self, bytes: &[u8]) -> Result<Vec<PaperRecord>, FeedError> {
        let feed =
            parser::parse(bytes).map_err(|e| FeedError::MalformedFeed(e.to_string()))?;

        feed.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_entry(index, entry))
            .collect()
    }

    /// Fetch and parse the newest papers in a category
    pub async fn latest(
        &self,
        category: &str,
        max_results: usize,
    ) -> Result<Vec<PaperRecord>, FeedError> {
        let url = self.query_url(category, max_results);
        tracing::debug!(%url, "fetching arXiv listing");
        let bytes = self.fetch(&url).await?;
        self.parse(&bytes)
    }

    fn parse_entry(
        index: usize,
        entry: &feed_rs::model::Entry,
    ) -> Result<PaperRecord, FeedError> {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .ok_or(FeedError::MissingField {
                entry: index,
                field: "title",
            })?;

        let summary = entry
            .summary
            .as_ref()
            .map(|s| s.content.clone())
            .ok_or(FeedError::MissingField {
                entry: index,
                field: "summary",
            })?;

        let published_date = entry
            .published
            .map(|d| d.to_rfc3339())
            .ok_or(FeedError::MissingField {
                entry: index,
                field: "published",
            })?;

        // arXiv marks the PDF variant with a `title="pdf"` link attribute
        let link = entry
            .links
            .iter()
            .find(|l| l.title.as_deref() == Some("pdf"))
            .map(|l| l.href.clone())
            .ok_or(FeedError::MissingField {
                entry: index,
                field: "link[pdf]",
            })?;

        let authors = entry
            .authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(PaperRecord {
            title,
            authors,
            summary,
            published_date,
            link,
        })
    }
}

impl Default for ArxivFeed {
    fn default() -> Self {
        Self::new()
    }
}
