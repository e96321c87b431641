use chrono::Utc;
use std::sync::Arc;

use crate::models::Vehicle;
use crate::repositories::VehicleStore;
use crate::utils::errors::{not_found_error, AppResult};
use crate::views;

/// Vehículo listo para renderizar, con su etiqueta relativa
pub struct VehicleDetail {
    pub vehicle: Vehicle,
    pub time_ago: String,
}

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.store.find_all().await
    }

    pub async fn get_detail(&self, vehicle_id: &str) -> AppResult<VehicleDetail> {
        let vehicle = self
            .store
            .find_by_vehicle_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        let time_ago = views::time_ago(vehicle.last_updated, Utc::now());
        Ok(VehicleDetail { vehicle, time_ago })
    }
}
