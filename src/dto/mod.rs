pub mod auth_dto;
pub mod maintenance_dto;

pub use auth_dto::CallbackQuery;
pub use maintenance_dto::MaintenanceForm;
