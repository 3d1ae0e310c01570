use axum::{Router, http::StatusCode, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod discovery;
pub mod logging_middleware;

async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}

//
// Router
//

/// The public discovery surface. No authentication: every endpoint is a
/// cache-friendly read.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/sitemap.xml", get(discovery::get_sitemap))
        .route("/llms.txt", get(discovery::get_llms_txt))
        .route("/robots.txt", get(discovery::get_robots))
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}
