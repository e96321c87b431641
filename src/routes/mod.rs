pub mod auth_routes;
pub mod maintenance_routes;
pub mod vehicle_routes;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Redirección 302 a `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { found("/vehicles") }))
        .route("/health", get(health))
        .merge(auth_routes::create_auth_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(maintenance_routes::create_maintenance_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de comprobación simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
