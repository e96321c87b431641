//! Modelo de MaintenanceRecord
//!
//! Registro de mantenimiento embebido dentro de un vehículo. No tiene
//! ciclo de vida propio: vive en el array JSONB `maintenance_records`
//! de la fila del vehículo.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro de mantenimiento introducido por el usuario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mileage: i64,
    #[serde(rename = "type")]
    pub service_types: Vec<String>,
    pub shop: String,
}

/// Campos editables de un registro (todo menos el identificador)
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceDetails {
    pub date: NaiveDate,
    pub mileage: i64,
    pub service_types: Vec<String>,
    pub shop: String,
}

impl MaintenanceRecord {
    /// Crear un registro nuevo con identificador generado
    pub fn new(details: MaintenanceDetails) -> Self {
        Self::with_id(Uuid::new_v4(), details)
    }

    /// Construir un registro conservando un identificador existente
    pub fn with_id(id: Uuid, details: MaintenanceDetails) -> Self {
        Self {
            id,
            date: details.date,
            mileage: details.mileage,
            service_types: details.service_types,
            shop: details.shop,
        }
    }
}
