#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use vehicle_tracker::clients::{VehicleDataProvider, VehicleInfo};
use vehicle_tracker::models::{MaintenanceRecord, Vehicle, VehicleRefresh, VehicleUpsert};
use vehicle_tracker::repositories::VehicleStore;
use vehicle_tracker::utils::errors::{AppError, AppResult};
use vehicle_tracker::{create_router, AppState};

/// Almacén en memoria con la misma semántica que el repositorio PostgreSQL
#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: Mutex<Vec<Vehicle>>,
}

impl InMemoryVehicleStore {
    pub fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.lock().unwrap().clone()
    }

    pub fn get(&self, vehicle_id: &str) -> Option<Vehicle> {
        self.snapshot().into_iter().find(|v| v.vehicle_id == vehicle_id)
    }

    pub fn insert(&self, vehicle: Vehicle) {
        self.vehicles.lock().unwrap().push(vehicle);
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn upsert(&self, upsert: VehicleUpsert) -> AppResult<Vehicle> {
        let vin = upsert.stored_vin();
        let mut vehicles = self.vehicles.lock().unwrap();

        if let Some(existing) = vehicles.iter_mut().find(|v| v.vehicle_id == upsert.vehicle_id) {
            existing.make = upsert.make;
            existing.model = upsert.model;
            existing.year = upsert.year;
            existing.vin = vin;
            existing.mileage = upsert.mileage;
            existing.last_updated = Utc::now();
            return Ok(existing.clone());
        }

        let vehicle = Vehicle {
            vehicle_id: upsert.vehicle_id,
            make: upsert.make,
            model: upsert.model,
            year: upsert.year,
            vin,
            mileage: upsert.mileage,
            last_updated: Utc::now(),
            maintenance_records: Vec::new(),
        };
        vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn refresh(&self, vehicle_id: &str, refresh: VehicleRefresh) -> AppResult<Option<Vehicle>> {
        let vin = refresh.stored_vin();
        let mut vehicles = self.vehicles.lock().unwrap();
        Ok(vehicles.iter_mut().find(|v| v.vehicle_id == vehicle_id).map(|v| {
            v.vin = vin;
            v.mileage = refresh.mileage;
            v.last_updated = Utc::now();
            v.clone()
        }))
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.snapshot())
    }

    async fn find_by_vehicle_id(&self, vehicle_id: &str) -> AppResult<Option<Vehicle>> {
        Ok(self.get(vehicle_id))
    }

    async fn add_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().unwrap();
        match vehicles.iter_mut().find(|v| v.vehicle_id == vehicle_id) {
            Some(v) => {
                v.maintenance_records.push(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let slot = vehicles
            .iter_mut()
            .find(|v| v.vehicle_id == vehicle_id)
            .and_then(|v| v.maintenance_records.iter_mut().find(|r| r.id == record.id));
        match slot {
            Some(existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_maintenance_record(&self, vehicle_id: &str, record_id: Uuid) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let Some(vehicle) = vehicles.iter_mut().find(|v| v.vehicle_id == vehicle_id) else {
            return Ok(false);
        };
        let before = vehicle.maintenance_records.len();
        vehicle.maintenance_records.retain(|r| r.id != record_id);
        Ok(vehicle.maintenance_records.len() < before)
    }
}

/// Proveedor simulado con respuestas configurables
#[derive(Default)]
pub struct MockProvider {
    pub vehicle_ids: Vec<String>,
    pub infos: HashMap<String, VehicleInfo>,
    /// Lecturas en kilómetros; las ausentes simulan un fallo del odómetro
    pub odometers_km: HashMap<String, f64>,
    pub failing_info: HashSet<String>,
    pub fail_exchange: bool,
    pub exchanged_codes: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn with_vehicle(mut self, vehicle_id: &str, info: VehicleInfo, odometer_km: Option<f64>) -> Self {
        self.vehicle_ids.push(vehicle_id.to_string());
        self.infos.insert(vehicle_id.to_string(), info);
        if let Some(km) = odometer_km {
            self.odometers_km.insert(vehicle_id.to_string(), km);
        }
        self
    }

    pub fn failing_info_for(mut self, vehicle_id: &str) -> Self {
        self.failing_info.insert(vehicle_id.to_string());
        self
    }
}

#[async_trait]
impl VehicleDataProvider for MockProvider {
    fn authorization_url(&self) -> String {
        "https://connect.example.com/oauth/authorize?scope=read_vehicle_info%20read_odometer".to_string()
    }

    async fn exchange_code(&self, code: &str) -> AppResult<String> {
        if self.fail_exchange {
            return Err(AppError::Provider("invalid code".to_string()));
        }
        self.exchanged_codes.lock().unwrap().push(code.to_string());
        Ok("token".to_string())
    }

    async fn vehicle_ids(&self) -> AppResult<Vec<String>> {
        Ok(self.vehicle_ids.clone())
    }

    async fn vehicle_info(&self, vehicle_id: &str) -> AppResult<VehicleInfo> {
        if self.failing_info.contains(vehicle_id) {
            return Err(AppError::Provider(format!("attributes unavailable for {}", vehicle_id)));
        }
        self.infos
            .get(vehicle_id)
            .cloned()
            .ok_or_else(|| AppError::Provider(format!("unknown vehicle {}", vehicle_id)))
    }

    async fn odometer_miles(&self, vehicle_id: &str) -> Option<f64> {
        self.odometers_km
            .get(vehicle_id)
            .map(|km| vehicle_tracker::utils::conversions::kilometers_to_miles(*km))
    }
}

pub fn info(make: &str, model: &str, year: i32, vin: Option<&str>) -> VehicleInfo {
    VehicleInfo {
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        year: Some(year),
        vin: vin.map(str::to_string),
    }
}

pub fn stored_vehicle(vehicle_id: &str) -> Vehicle {
    Vehicle {
        vehicle_id: vehicle_id.to_string(),
        make: Some("Honda".to_string()),
        model: Some("Civic".to_string()),
        year: Some(2018),
        vin: "N/A".to_string(),
        mileage: Some(1000.0),
        last_updated: Utc::now(),
        maintenance_records: Vec::new(),
    }
}

pub fn app(store: Arc<InMemoryVehicleStore>, provider: Arc<MockProvider>) -> Router {
    create_router(AppState::new(store, provider))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
