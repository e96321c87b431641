use axum::{
    extract::{Path, State},
    response::Response,
    routing::post,
    Router,
};
use axum_extra::extract::Form;
use tracing::error;
use uuid::Uuid;

use super::found;
use crate::controllers::MaintenanceController;
use crate::dto::MaintenanceForm;
use crate::state::AppState;
use crate::utils::errors::{internal_error, AppError};

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/maintenance", post(create_record))
        .route("/vehicles/:id/maintenance/:record_id/edit", post(update_record))
        .route("/vehicles/:id/maintenance/:record_id/delete", post(delete_record))
}

// Los errores del cliente se devuelven tal cual; el resto se oculta tras un 500
fn client_or_internal(e: AppError, message: &'static str) -> AppError {
    match e {
        AppError::NotFound(_) | AppError::BadRequest(_) | AppError::Validation(_) => e,
        other => {
            error!("❌ {}: {}", message, other);
            internal_error(message)
        }
    }
}

fn detail_redirect(vehicle_id: &str) -> Response {
    found(&format!("/vehicles/{}", urlencoding::encode(vehicle_id)))
}

async fn create_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<MaintenanceForm>,
) -> Result<Response, AppError> {
    MaintenanceController::new(state.store.clone())
        .create(&id, form)
        .await
        .map_err(|e| client_or_internal(e, "Failed to add maintenance record."))?;

    Ok(detail_redirect(&id))
}

async fn update_record(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(String, Uuid)>,
    Form(form): Form<MaintenanceForm>,
) -> Result<Response, AppError> {
    MaintenanceController::new(state.store.clone())
        .update(&id, record_id, form)
        .await
        .map_err(|e| client_or_internal(e, "Failed to update maintenance record."))?;

    Ok(detail_redirect(&id))
}

async fn delete_record(
    State(state): State<AppState>,
    Path((id, record_id)): Path<(String, Uuid)>,
) -> Result<Response, AppError> {
    MaintenanceController::new(state.store.clone())
        .delete(&id, record_id)
        .await
        .map_err(|e| client_or_internal(e, "Failed to delete maintenance record."))?;

    Ok(detail_redirect(&id))
}
