//! AmplifAI API Routes
//!
//! - / and /status - Service information and health
//! - /launch-campaign - Campaign launch
//! - /upload-playbook, /upload-playbook-file - Playbook intake
//! - /route/:module_name - Generic module routing
//! - /logs/stats, /memory/stats, /memory/recent - Store statistics
//! - /debug/config, /test/webhook - Diagnostics

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error;
use crate::AppState;

pub mod campaign;
pub mod diagnostics;
pub mod playbook;
pub mod route;
pub mod stats;
pub mod status;
pub mod swagger;

#[cfg(test)]
mod tests;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(status::router())
        .merge(campaign::router())
        .merge(playbook::router())
        .merge(route::router())
        .merge(stats::router())
        .merge(diagnostics::router())
        .method_not_allowed_fallback(error::method_not_allowed)
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
