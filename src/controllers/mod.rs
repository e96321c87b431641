pub mod maintenance_controller;
pub mod vehicle_controller;

pub use maintenance_controller::MaintenanceController;
pub use vehicle_controller::{VehicleController, VehicleDetail};
