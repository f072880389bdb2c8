use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api;
use crate::state::AppState;

/// Assembles the full application: `/api` routes, CORS, and the static
/// single-page client as the fallback for every other path.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new("public").fallback(ServeFile::new("public/index.html"));

    Router::new()
        .nest("/api", api::router())
        .fallback_service(assets)
        .layer(cors)
        .with_state(state)
}

pub async fn run(state: AppState, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server is running on http://localhost:{port}");
    axum::serve(listener, app(state))
        .await
        .context("Server exited")
}
