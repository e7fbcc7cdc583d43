use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

mod routes;
mod template;
mod upload;

/// Uploads above this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/extract", post(routes::extract))
        .route("/extract/csv", post(routes::extract_csv))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let addr: SocketAddr = std::env::var("PANEX_LISTEN")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
