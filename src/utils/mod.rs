//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y conversiones
//! de unidades comunes.

pub mod conversions;
pub mod errors;

pub use errors::{AppError, AppResult};
