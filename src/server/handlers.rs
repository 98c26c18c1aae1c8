//! Route handlers.
//!
//! The wire contract is inherited from the service this replaces: every
//! response is HTTP 200 and failures are signaled by an `error` field in the
//! JSON body. Typed errors are logged here before being collapsed, and a
//! single request's failure never affects other requests.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::PaperRecord;
use crate::server::AppState;

/// Plain-text liveness probe
pub async fn liveness() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " is running")
}

/// Body accepted by the embedding endpoint
#[derive(Debug, Deserialize)]
pub struct EmbeddingBody {
    pub input: String,
}

/// Envelope returned by the listing endpoint
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Papers { papers: Vec<PaperRecord> },
    Error { error: String },
}

/// Envelope returned by the embedding endpoint
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EmbeddingResponse {
    Message { message: String },
    Error { error: String },
}

/// GET `/get-arxiv-papers` — newest papers in the configured category
pub async fn get_arxiv_papers(State(state): State<AppState>) -> Json<ListingResponse> {
    let feed_config = &state.config.feed;

    match state
        .feed
        .latest(&feed_config.category, feed_config.max_results)
        .await
    {
        Ok(papers) => Json(ListingResponse::Papers { papers }),
        Err(err) => {
            tracing::warn!(error = %err, category = %feed_config.category, "paper listing failed");
            Json(ListingResponse::Error {
                error: err.to_string(),
            })
        }
    }
}

/// POST `/create-embedding-from-body` — embed the `input` text and persist it
pub async fn create_embedding_from_body(
    State(state): State<AppState>,
    body: Result<Json<EmbeddingBody>, JsonRejection>,
) -> Json<EmbeddingResponse> {
    // A missing or malformed body is reported like any other failure,
    // inside the 200 envelope.
    let Ok(Json(body)) = body else {
        return Json(EmbeddingResponse::Error {
            error: "request body must be JSON with an `input` field".to_string(),
        });
    };

    let embedding = match state.embeddings.embed(&body.input).await {
        Ok(embedding) => embedding,
        Err(err) => {
            tracing::warn!(error = %err, "embedding generation failed");
            return Json(EmbeddingResponse::Error {
                error: err.to_string(),
            });
        }
    };

    match state.store.put(&embedding).await {
        Ok(()) => Json(EmbeddingResponse::Message {
            message: "embedding saved successfully".to_string(),
        }),
        Err(err) => {
            // Detail stays in the log; the body keeps the legacy generic message.
            tracing::warn!(error = %err, id = %embedding.id, "embedding persistence failed");
            Json(EmbeddingResponse::Error {
                error: "failed to save embedding".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_response_envelope() {
        let ok = serde_json::to_value(ListingResponse::Papers { papers: vec![] }).unwrap();
        assert!(ok["papers"].is_array());

        let err = serde_json::to_value(ListingResponse::Error {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(err["error"], "boom");
    }

    #[test]
    fn test_embedding_response_envelope() {
        let ok = serde_json::to_value(EmbeddingResponse::Message {
            message: "saved".to_string(),
        })
        .unwrap();
        assert_eq!(ok["message"], "saved");
        assert!(ok.get("error").is_none());
    }
}
