//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para las
//! operaciones de upsert y refresco. Mapea a la tabla `vehicles`, cuya
//! clave natural es el identificador externo del proveedor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

use super::maintenance::MaintenanceRecord;

/// Valor almacenado cuando el proveedor no entrega VIN
pub const VIN_UNAVAILABLE: &str = "N/A";

/// Vehicle principal con sus registros de mantenimiento embebidos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: String,
    pub mileage: Option<f64>,
    pub last_updated: DateTime<Utc>,
    pub maintenance_records: Vec<MaintenanceRecord>,
}

impl Vehicle {
    /// Nombre legible: "2020 Toyota Corolla"
    pub fn display_name(&self) -> String {
        let parts: Vec<String> = [
            self.year.map(|y| y.to_string()),
            self.make.clone(),
            self.model.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            self.vehicle_id.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Fila tal como la devuelve PostgreSQL
#[derive(Debug, FromRow)]
pub struct VehicleRow {
    pub vehicle_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: String,
    pub mileage: Option<f64>,
    pub last_updated: DateTime<Utc>,
    pub maintenance_records: Json<Vec<MaintenanceRecord>>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Self {
            vehicle_id: row.vehicle_id,
            make: row.make,
            model: row.model,
            year: row.year,
            vin: row.vin,
            mileage: row.mileage,
            last_updated: row.last_updated,
            maintenance_records: row.maintenance_records.0,
        }
    }
}

/// Datos para insertar o actualizar un vehículo tras el callback OAuth
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleUpsert {
    pub vehicle_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub mileage: Option<f64>,
}

impl VehicleUpsert {
    /// VIN a persistir, con el centinela si el proveedor no lo dio
    pub fn stored_vin(&self) -> String {
        stored_vin(self.vin.as_deref())
    }
}

/// Datos que el refresco periódico actualiza en sitio
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRefresh {
    pub vin: Option<String>,
    pub mileage: Option<f64>,
}

impl VehicleRefresh {
    pub fn stored_vin(&self) -> String {
        stored_vin(self.vin.as_deref())
    }
}

fn stored_vin(vin: Option<&str>) -> String {
    match vin {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => VIN_UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upsert(vin: Option<&str>) -> VehicleUpsert {
        VehicleUpsert {
            vehicle_id: "v1".to_string(),
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2020),
            vin: vin.map(str::to_string),
            mileage: Some(62.14),
        }
    }

    #[test]
    fn test_missing_vin_uses_sentinel() {
        assert_eq!(upsert(None).stored_vin(), "N/A");
        assert_eq!(upsert(Some("")).stored_vin(), "N/A");
        assert_eq!(upsert(Some("1HGCM82633A004352")).stored_vin(), "1HGCM82633A004352");
    }

    #[test]
    fn test_display_name() {
        let vehicle = Vehicle {
            vehicle_id: "v1".to_string(),
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2020),
            vin: VIN_UNAVAILABLE.to_string(),
            mileage: None,
            last_updated: Utc::now(),
            maintenance_records: Vec::new(),
        };
        assert_eq!(vehicle.display_name(), "2020 Toyota Corolla");

        let bare = Vehicle { make: None, model: None, year: None, ..vehicle };
        assert_eq!(bare.display_name(), "v1");
    }
}
