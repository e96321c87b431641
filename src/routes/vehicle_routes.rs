use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::error;

use crate::controllers::VehicleController;
use crate::state::AppState;
use crate::utils::errors::{internal_error, AppError};
use crate::views;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicles = controller.list().await.map_err(|e| {
        error!("❌ Error cargando vehículos: {}", e);
        internal_error("Failed to load vehicles.")
    })?;

    Ok(Html(views::vehicle_list_page(&vehicles)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let detail = controller.get_detail(&id).await.map_err(|e| match e {
        AppError::NotFound(_) => e,
        other => {
            error!("❌ Error cargando el vehículo {}: {}", id, other);
            internal_error("Failed to load vehicle.")
        }
    })?;

    Ok(Html(views::vehicle_detail_page(&detail.vehicle, &detail.time_ago)))
}
