//! Paper record model for arXiv feed entries.

use serde::{Deserialize, Serialize};

/// A single paper entry from the arXiv listing feed.
///
/// Values are carried through exactly as the feed reports them;
/// `published_date` in particular stays an unparsed ISO-8601-like string.
/// Records are created per request and discarded after serialization;
/// there is no identity beyond structural equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title
    pub title: String,

    /// Author names joined with `", "` in feed order; empty when the entry
    /// lists no authors
    pub authors: String,

    /// Abstract text
    pub summary: String,

    /// Publication date as reported by the feed
    pub published_date: String,

    /// URL of the PDF variant of the paper
    pub link: String,
}
