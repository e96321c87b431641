//! Clients - HTTP Clients for External APIs
//!
//! This module contains the vehicle-data provider abstraction and its
//! Smartcar implementation.

pub mod smartcar_client;

use async_trait::async_trait;
use serde::Deserialize;

use crate::utils::errors::AppResult;

pub use smartcar_client::SmartcarClient;

/// Atributos estáticos de un vehículo según el proveedor
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VehicleInfo {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub vin: Option<String>,
}

/// Proveedor OAuth + telemetría de vehículos
#[async_trait]
pub trait VehicleDataProvider: Send + Sync {
    /// URL de consentimiento a la que se redirige al usuario
    fn authorization_url(&self) -> String;

    /// Intercambiar el código por un token y guardarlo como credencial actual
    async fn exchange_code(&self, code: &str) -> AppResult<String>;

    async fn vehicle_ids(&self) -> AppResult<Vec<String>>;

    async fn vehicle_info(&self, vehicle_id: &str) -> AppResult<VehicleInfo>;

    /// Lectura del odómetro en millas; `None` si el proveedor no la da
    async fn odometer_miles(&self, vehicle_id: &str) -> Option<f64>;
}
