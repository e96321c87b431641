use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::dto::MaintenanceForm;
use crate::models::MaintenanceRecord;
use crate::repositories::VehicleStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct MaintenanceController {
    store: Arc<dyn VehicleStore>,
}

impl MaintenanceController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, vehicle_id: &str, form: MaintenanceForm) -> AppResult<MaintenanceRecord> {
        let record = MaintenanceRecord::new(form.into_details()?);

        if !self.store.add_maintenance_record(vehicle_id, record.clone()).await? {
            return Err(not_found_error("Vehicle"));
        }

        info!("🔧 Registro de mantenimiento {} añadido al vehículo {}", record.id, vehicle_id);
        Ok(record)
    }

    pub async fn update(
        &self,
        vehicle_id: &str,
        record_id: Uuid,
        form: MaintenanceForm,
    ) -> AppResult<MaintenanceRecord> {
        let record = MaintenanceRecord::with_id(record_id, form.into_details()?);

        if !self.store.update_maintenance_record(vehicle_id, record.clone()).await? {
            return Err(not_found_error("Maintenance record"));
        }

        info!("🔧 Registro de mantenimiento {} actualizado en el vehículo {}", record_id, vehicle_id);
        Ok(record)
    }

    pub async fn delete(&self, vehicle_id: &str, record_id: Uuid) -> AppResult<()> {
        if !self.store.delete_maintenance_record(vehicle_id, record_id).await? {
            return Err(not_found_error("Maintenance record"));
        }

        info!("🗑️ Registro de mantenimiento {} eliminado del vehículo {}", record_id, vehicle_id);
        Ok(())
    }
}
