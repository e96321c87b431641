//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, base de
//! datos, credenciales OAuth del proveedor y el intervalo de refresco.

use anyhow::{anyhow, Context, Result};
use std::env;

use super::database::DatabaseConfig;

pub const DEFAULT_AUTH_URL: &str = "https://connect.smartcar.com/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://auth.smartcar.com/oauth/token";
pub const DEFAULT_API_URL: &str = "https://api.smartcar.com/v2.0";

/// Configuración del cliente OAuth del proveedor de datos de vehículos
#[derive(Debug, Clone)]
pub struct SmartcarConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// `live`, `test` o `simulated`
    pub mode: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl SmartcarConfig {
    /// Configuración con las URLs públicas por defecto
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            mode: "live".to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub smartcar: SmartcarConfig,
    /// Horas entre refrescos programados; 0 desactiva el refresco
    pub refresh_interval_hours: u32,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow!("{} must be set", key))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            None => 3000,
        };

        let refresh_interval_hours = match lookup("REFRESH_INTERVAL_HOURS") {
            Some(value) => value.parse::<u32>().with_context(|| {
                format!("REFRESH_INTERVAL_HOURS must be a valid number, got '{}'", value)
            })?,
            None => 12,
        };
        if refresh_interval_hours > 24 || (refresh_interval_hours > 0 && 24 % refresh_interval_hours != 0) {
            return Err(anyhow!(
                "REFRESH_INTERVAL_HOURS must divide 24, got {}",
                refresh_interval_hours
            ));
        }

        let mut database = DatabaseConfig::new(required("DATABASE_URL")?);
        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            database.max_connections = value.parse::<u32>().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a valid number, got '{}'", value)
            })?;
        }

        let mut smartcar = SmartcarConfig::new(
            required("SMARTCAR_CLIENT_ID")?,
            required("SMARTCAR_CLIENT_SECRET")?,
            required("SMARTCAR_REDIRECT_URI")?,
        );
        if let Some(mode) = lookup("SMARTCAR_MODE") {
            if !matches!(mode.as_str(), "live" | "test" | "simulated") {
                return Err(anyhow!("SMARTCAR_MODE must be live, test or simulated, got '{}'", mode));
            }
            smartcar.mode = mode;
        }
        if let Some(url) = lookup("SMARTCAR_AUTH_URL") {
            smartcar.auth_url = url;
        }
        if let Some(url) = lookup("SMARTCAR_TOKEN_URL") {
            smartcar.token_url = url;
        }
        if let Some(url) = lookup("SMARTCAR_API_URL") {
            smartcar.api_url = url.trim_end_matches('/').to_string();
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database,
            smartcar,
            refresh_interval_hours,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// El refresco programado está activo
    pub fn refresh_enabled(&self) -> bool {
        self.refresh_interval_hours > 0
    }
}
