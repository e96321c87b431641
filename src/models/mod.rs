//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos: el vehículo, que mapea
//! a la tabla `vehicles`, y sus registros de mantenimiento embebidos.

pub mod maintenance;
pub mod vehicle;

pub use maintenance::{MaintenanceDetails, MaintenanceRecord};
pub use vehicle::{Vehicle, VehicleRefresh, VehicleRow, VehicleUpsert, VIN_UNAVAILABLE};
