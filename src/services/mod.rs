//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la
//! sincronización con el proveedor y el refresco programado.

pub mod refresh_scheduler;
pub mod vehicle_sync_service;

pub use refresh_scheduler::RefreshScheduler;
pub use vehicle_sync_service::{RefreshSummary, VehicleSyncService};
