//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: el almacén de vehículos y el proveedor.

use std::sync::Arc;

use crate::clients::VehicleDataProvider;
use crate::repositories::VehicleStore;
use crate::services::VehicleSyncService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
    pub provider: Arc<dyn VehicleDataProvider>,
}

impl AppState {
    pub fn new(store: Arc<dyn VehicleStore>, provider: Arc<dyn VehicleDataProvider>) -> Self {
        Self { store, provider }
    }

    /// Servicio de sincronización sobre el mismo almacén y proveedor
    pub fn sync_service(&self) -> VehicleSyncService {
        VehicleSyncService::new(self.store.clone(), self.provider.clone())
    }
}
