//! Repositorios de acceso a datos

pub mod vehicle_repository;

pub use vehicle_repository::{PgVehicleRepository, VehicleStore};
