//! Vistas HTML renderizadas en el servidor

pub mod layout;
pub mod vehicles;

pub use layout::{escape_html, page, time_ago};
pub use vehicles::{vehicle_detail_page, vehicle_list_page};
