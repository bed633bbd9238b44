//! Generic Route - Accept requests for any named module

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    routing::post,
    Json, Router,
};

use amplifai::RouteRequest;

use crate::models::{GenericRouteRequest, GenericRouteResponse};
use crate::AppState;

/// Route a request to a module
///
/// The body is optional. Anything that is not a JSON object with
/// `payload`/`metadata` is treated as empty.
#[utoipa::path(
    post,
    path = "/route/{module_name}",
    params(
        ("module_name" = String, Path, description = "Target module")
    ),
    request_body = GenericRouteRequest,
    responses(
        (status = 200, description = "Request routed", body = GenericRouteResponse)
    ),
    tag = "Route"
)]
pub async fn route_request(
    State(state): State<AppState>,
    Path(module_name): Path<String>,
    body: Bytes,
) -> Json<GenericRouteResponse> {
    let req = GenericRouteRequest::from_body(&body);
    tracing::info!("🔀 Routing request to module: {}", module_name);

    let receipt = state
        .ingest
        .route(RouteRequest::new(module_name, req.payload, req.metadata))
        .await;
    Json(receipt.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/route/:module_name",
        post(route_request).layer(DefaultBodyLimit::disable()),
    )
}
