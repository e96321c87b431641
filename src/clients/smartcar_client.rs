//! Cliente HTTP para Smartcar
//!
//! Cubre el flujo OAuth (URL de consentimiento e intercambio del código)
//! y las lecturas de la API de vehículos: lista de ids, atributos y
//! odómetro. El token de acceso del último intercambio se guarda en el
//! propio cliente y se usa en todas las lecturas posteriores.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{VehicleDataProvider, VehicleInfo};
use crate::config::SmartcarConfig;
use crate::utils::conversions::kilometers_to_miles;
use crate::utils::errors::{AppError, AppResult};

/// Permisos de solo lectura solicitados al usuario
pub const SCOPES: [&str; 2] = ["read_vehicle_info", "read_odometer"];

const PAGE_SIZE: usize = 50;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct VehiclesResponse {
    vehicles: Vec<String>,
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    count: usize,
}

#[derive(Debug, Deserialize)]
struct OdometerResponse {
    distance: Option<f64>,
}

/// Cliente del proveedor de datos de vehículos
#[derive(Clone)]
pub struct SmartcarClient {
    client: Client,
    config: SmartcarConfig,
    access_token: Arc<RwLock<Option<String>>>,
}

impl SmartcarClient {
    pub fn new(config: SmartcarConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("VehicleTracker/1.0")
            .build()?;

        Ok(Self {
            client,
            config,
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Token vigente, o error si todavía no hubo intercambio
    async fn bearer_token(&self) -> AppResult<String> {
        self.access_token
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::Provider("Access token is not set.".to_string()))
    }

    /// GET autenticado contra la API de vehículos
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.config.api_url, path);

        log::debug!("🌐 GET {}", url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Smartcar GET {} falló con status {}: {}", path, status, error_text);
            return Err(AppError::Provider(format!("GET {} returned {}", path, status)));
        }

        Ok(response.json::<T>().await?)
    }

    async fn odometer_kilometers(&self, vehicle_id: &str) -> AppResult<f64> {
        let odometer: OdometerResponse = self
            .get_json(&format!("/vehicles/{}/odometer", urlencoding::encode(vehicle_id)))
            .await?;
        let kilometers = odometer.distance.unwrap_or(0.0);
        if kilometers < 0.0 {
            return Err(AppError::Provider(format!(
                "negative odometer reading: {} km",
                kilometers
            )));
        }
        Ok(kilometers)
    }
}

#[async_trait]
impl VehicleDataProvider for SmartcarClient {
    fn authorization_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&mode={}",
            self.config.auth_url,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(&SCOPES.join(" ")),
            urlencoding::encode(&self.config.mode),
        )
    }

    async fn exchange_code(&self, code: &str) -> AppResult<String> {
        log::info!("🔐 Intercambiando código de autorización");

        let response = self
            .client
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Intercambio de token falló con status {}: {}", status, error_text);
            return Err(AppError::Provider(format!("token exchange returned {}", status)));
        }

        let token: TokenResponse = response.json().await?;
        log::info!("✅ Token de acceso obtenido (expira en {:?}s)", token.expires_in);

        *self.access_token.write().await = Some(token.access_token.clone());
        Ok(token.access_token)
    }

    async fn vehicle_ids(&self) -> AppResult<Vec<String>> {
        let mut ids = Vec::new();

        loop {
            let page: VehiclesResponse = self
                .get_json(&format!("/vehicles?limit={}&offset={}", PAGE_SIZE, ids.len()))
                .await?;
            let fetched = page.vehicles.len();
            ids.extend(page.vehicles);

            let total = page.paging.map(|p| p.count).unwrap_or(ids.len());
            if fetched == 0 || ids.len() >= total {
                break;
            }
        }

        log::info!("🚗 Ids de vehículos obtenidos: {:?}", ids);
        Ok(ids)
    }

    async fn vehicle_info(&self, vehicle_id: &str) -> AppResult<VehicleInfo> {
        let info: VehicleInfo = self
            .get_json(&format!("/vehicles/{}", urlencoding::encode(vehicle_id)))
            .await?;
        log::info!("🚗 Atributos del vehículo {}: {:?}", vehicle_id, info);
        Ok(info)
    }

    async fn odometer_miles(&self, vehicle_id: &str) -> Option<f64> {
        match self.odometer_kilometers(vehicle_id).await {
            Ok(kilometers) => Some(kilometers_to_miles(kilometers)),
            Err(e) => {
                log::warn!("⚠️ Odómetro no disponible para el vehículo {}: {}", vehicle_id, e);
                None
            }
        }
    }
}
