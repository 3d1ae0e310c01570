//! Handlers for the three discovery artifacts.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use core_seo::robots::normalize_robots;
use core_seo::{DiscoveryError, RequestContext};

use crate::config::ROBOTS_CONTENT_VAR;
use crate::state::AppState;

/// Wrapper surfacing core failures as 5xx responses with a JSON body.
pub struct DiscoveryFailure(DiscoveryError);

impl From<DiscoveryError> for DiscoveryFailure {
    fn from(err: DiscoveryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DiscoveryFailure {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("discovery request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}

/// Resolves the request's scheme/host/base-path for absolute URL rendering.
/// Scheme honors `x-forwarded-proto` so links stay correct behind a proxy.
fn request_context(headers: &HeaderMap) -> RequestContext {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    RequestContext::new(scheme, host, "")
}

/// GET /sitemap.xml - Sitemap of every discoverable page
pub async fn get_sitemap(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, DiscoveryFailure> {
    let request = request_context(&headers);
    let xml = state.provider.render_sitemap(&request).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

/// GET /llms.txt - Markdown digest of discoverable pages
pub async fn get_llms_txt(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, DiscoveryFailure> {
    let request = request_context(&headers);
    let digest = state.provider.render_llms_txt(&request).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], digest))
}

/// GET /robots.txt - Normalized passthrough of the configured robots content
///
/// Read from the environment on every call; an absent value yields an empty
/// body, never an error.
pub async fn get_robots() -> impl IntoResponse {
    let configured = std::env::var(ROBOTS_CONTENT_VAR).unwrap_or_default();
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        normalize_robots(&configured),
    )
}
