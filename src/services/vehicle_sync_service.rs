//! Sincronización de vehículos con el proveedor
//!
//! Dos flujos: el callback OAuth, que importa todos los vehículos del
//! usuario y se aborta con el primer error, y el refresco periódico,
//! que actualiza VIN y kilometraje de cada vehículo guardado y aísla
//! los errores por vehículo.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::clients::VehicleDataProvider;
use crate::models::{Vehicle, VehicleRefresh, VehicleUpsert};
use crate::repositories::VehicleStore;
use crate::utils::errors::AppResult;

/// Resumen de una ejecución del refresco
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RefreshSummary {
    pub updated: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct VehicleSyncService {
    store: Arc<dyn VehicleStore>,
    provider: Arc<dyn VehicleDataProvider>,
}

impl VehicleSyncService {
    pub fn new(store: Arc<dyn VehicleStore>, provider: Arc<dyn VehicleDataProvider>) -> Self {
        Self { store, provider }
    }

    /// Completar el flujo OAuth: intercambiar el código e importar los vehículos.
    /// Los vehículos ya guardados antes de un error no se revierten.
    pub async fn complete_authorization(&self, code: &str) -> AppResult<Vec<Vehicle>> {
        self.provider.exchange_code(code).await?;
        let vehicle_ids = self.provider.vehicle_ids().await?;

        let mut vehicles = Vec::with_capacity(vehicle_ids.len());
        for vehicle_id in vehicle_ids {
            let info = self.provider.vehicle_info(&vehicle_id).await?;
            let mileage = self.provider.odometer_miles(&vehicle_id).await;

            let vehicle = self
                .store
                .upsert(VehicleUpsert {
                    vehicle_id,
                    make: info.make,
                    model: info.model,
                    year: info.year,
                    vin: info.vin,
                    mileage,
                })
                .await?;

            info!("💾 Vehículo {} guardado", vehicle.vehicle_id);
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    /// Refrescar VIN y kilometraje de todos los vehículos guardados
    pub async fn refresh_all(&self) -> AppResult<RefreshSummary> {
        let vehicles = self.store.find_all().await?;
        let mut summary = RefreshSummary::default();

        for vehicle in vehicles {
            match self.refresh_one(&vehicle.vehicle_id).await {
                Ok(()) => {
                    info!("🔄 Vehículo {} actualizado", vehicle.vehicle_id);
                    summary.updated += 1;
                }
                Err(e) => {
                    error!("❌ Error refrescando el vehículo {}: {}", vehicle.vehicle_id, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    async fn refresh_one(&self, vehicle_id: &str) -> AppResult<()> {
        let mileage = self.provider.odometer_miles(vehicle_id).await;
        let info = self.provider.vehicle_info(vehicle_id).await?;

        let refreshed = self
            .store
            .refresh(vehicle_id, VehicleRefresh { vin: info.vin, mileage })
            .await?;

        if refreshed.is_none() {
            // Borrado entre la lectura y la escritura
            warn!("⚠️ El vehículo {} desapareció durante el refresco", vehicle_id);
        }
        Ok(())
    }
}
