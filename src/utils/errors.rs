//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.
//! Las páginas se renderizan en el servidor, así que las respuestas
//! de error son texto plano con un mensaje estático.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// El mensaje es público: se envía tal cual al cliente
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Error de base de datos: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.".to_string())
            }

            AppError::Validation(e) => {
                tracing::warn!("⚠️ Error de validación: {}", e);
                (StatusCode::BAD_REQUEST, "The provided data is invalid.".to_string())
            }

            AppError::Http(e) => {
                tracing::error!("❌ Error HTTP: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.".to_string())
            }

            AppError::Provider(msg) => {
                tracing::error!("❌ Error del proveedor: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.".to_string())
            }

            AppError::NotFound(msg) => {
                tracing::debug!("🔍 Recurso no encontrado: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }

            AppError::BadRequest(msg) => {
                tracing::debug!("⚠️ Petición inválida: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found.", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores internos con mensaje público estático
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
