//! Custom Axum extractors.
//!
//! - `HxRequest`: whether the request was issued by htmx
//! - `Presentation`: how the response should be rendered
//!
//! # Examples
//!
//! ```ignore
//! use todo_web::extractors::Presentation;
//!
//! async fn handler(presentation: Presentation) -> Response {
//!     match presentation {
//!         Presentation::Json => Json(todos).into_response(),
//!         Presentation::Fragment => Html(list_fragment).into_response(),
//!         Presentation::Page => Html(full_page).into_response(),
//!     }
//! }
//! ```

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Header htmx sets on every request it issues.
pub const HX_REQUEST_HEADER: &str = "HX-Request";

/// Whether the request came from htmx (`HX-Request: true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(is_htmx(&parts.headers)))
    }
}

/// Response rendition chosen from the request headers.
///
/// # Priority
///
/// 1. `Accept` naming `application/json` → [`Presentation::Json`]
/// 2. `HX-Request: true` → [`Presentation::Fragment`]
/// 3. anything else → [`Presentation::Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// JSON body for API clients
    Json,
    /// HTML fragment for htmx to swap in place
    Fragment,
    /// Full HTML page, or a redirect after a mutation
    Page,
}

impl Presentation {
    /// Decide the rendition for a set of request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        if wants_json(headers) {
            Self::Json
        } else if is_htmx(headers) {
            Self::Fragment
        } else {
            Self::Page
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Presentation
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| {
            accept
                .split(',')
                .any(|media| media.trim().starts_with("application/json"))
        })
}
