//! HTTP surface exposing the paper listing and embedding endpoints.

mod handlers;
mod state;

pub use handlers::{EmbeddingBody, EmbeddingResponse, ListingResponse};
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route("/get-arxiv-papers", get(handlers::get_arxiv_papers))
        .route(
            "/create-embedding-from-body",
            post(handlers::create_embedding_from_body),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
