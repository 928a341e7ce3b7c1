//! Static assets embedded into the binary with rust-embed.

use axum::{
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded `web/static/` directory
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

/// Serve one embedded file.
///
/// # Endpoint
///
/// ```text
/// GET /static/*path
/// ```
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let Some(file) = StaticAssets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let content_type = HeaderValue::from_str(file.metadata.mimetype())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    (
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            ),
        ],
        file.data.into_owned(),
    )
        .into_response()
}
