//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is a client-rendered bundle; the server only hands out
//! files. Paths that match no file get `index.html` so a reload on any URL
//! still boots the app.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static bundle at `/`, plus `/healthz`.
pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index_file(site_dir)));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn index_file(site_dir: &Path) -> PathBuf {
    site_dir.join("index.html")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
