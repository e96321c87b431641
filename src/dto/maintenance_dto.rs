use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::MaintenanceDetails;
use crate::utils::errors::{bad_request_error, AppResult};

// Formulario de alta/edición de un mantenimiento (application/x-www-form-urlencoded)
#[derive(Debug, Deserialize)]
pub struct MaintenanceForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mileage: String,
    #[serde(rename = "type[]", alias = "type", default)]
    pub service_types: Vec<String>,
    #[serde(default)]
    pub shop: String,
}

// Valores ya convertidos, antes de validar invariantes
#[derive(Debug, Validate)]
struct MaintenanceInput {
    #[validate(range(min = 0))]
    mileage: i64,
    #[validate(length(min = 1))]
    service_types: Vec<String>,
}

impl MaintenanceForm {
    /// Convertir los campos de texto y validar el registro resultante
    pub fn into_details(self) -> AppResult<MaintenanceDetails> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| bad_request_error("Invalid maintenance date."))?;
        let mileage = self
            .mileage
            .trim()
            .parse::<i64>()
            .map_err(|_| bad_request_error("Invalid maintenance mileage."))?;

        let service_types: Vec<String> = self
            .service_types
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let input = MaintenanceInput { mileage, service_types };
        input.validate()?;

        Ok(MaintenanceDetails {
            date,
            mileage: input.mileage,
            service_types: input.service_types,
            shop: self.shop.trim().to_string(),
        })
    }
}
