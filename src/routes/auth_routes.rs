use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use tracing::{error, info, warn};

use super::found;
use crate::dto::CallbackQuery;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, internal_error, AppError};

/// Configura las rutas del flujo OAuth
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
}

async fn login(State(state): State<AppState>) -> Response {
    found(&state.provider.authorization_url())
}

async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, AppError> {
    if let Some(reason) = &query.error {
        warn!(
            "⚠️ Autorización denegada: {} {}",
            reason,
            query.error_description.as_deref().unwrap_or_default()
        );
    }

    let code = query
        .authorization_code()
        .ok_or_else(|| bad_request_error("Missing authorization code."))?;

    let vehicles = state
        .sync_service()
        .complete_authorization(code)
        .await
        .map_err(|e| {
            error!("❌ Error en el callback: {}", e);
            internal_error("Failed to fetch and save vehicles.")
        })?;

    info!("✅ Vehículos y kilometraje actualizados ({} vehículos)", vehicles.len());
    Ok(found("/vehicles"))
}
