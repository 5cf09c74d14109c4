//! Embedded static assets for single-binary distribution.
//!
//! Everything under `public/` (stylesheet, article and portrait images) is
//! compiled into the binary and served from `/assets/{*path}`.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "public/"]
struct PublicAssets;

/// Stylesheet linked from every page
pub const STYLESHEET: &str = "blog.css";

/// Whether an asset with this name is embedded
pub fn exists(name: &str) -> bool {
    PublicAssets::get(name).is_some()
}

/// GET /assets/{*path} - Serve an embedded asset
pub async fn asset_handler(Path(path): Path<String>) -> Response {
    let Some(file) = PublicAssets::get(&path) else {
        tracing::debug!("Asset not found: {}", path);
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    (
        [
            (header::CONTENT_TYPE, mime.essence_str().to_string()),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        file.data,
    )
        .into_response()
}
