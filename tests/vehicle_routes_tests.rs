mod common;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

use common::{app, get, stored_vehicle, InMemoryVehicleStore, MockProvider};
use vehicle_tracker::models::{MaintenanceDetails, MaintenanceRecord};

#[tokio::test]
async fn test_list_renders_all_vehicles() {
    let store = Arc::new(InMemoryVehicleStore::default());
    store.insert(stored_vehicle("v1"));
    store.insert(stored_vehicle("v2"));

    let response = get(app(store, Arc::new(MockProvider::default())), "/vehicles").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("href=\"/vehicles/v1\""));
    assert!(response.body.contains("href=\"/vehicles/v2\""));
    assert!(response.body.contains("2018 Honda Civic"));
}

#[tokio::test]
async fn test_missing_vehicle_is_not_found() {
    let store = Arc::new(InMemoryVehicleStore::default());

    let response = get(app(store, Arc::new(MockProvider::default())), "/vehicles/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Vehicle not found.");
}

#[tokio::test]
async fn test_detail_shows_history_and_relative_label() {
    let store = Arc::new(InMemoryVehicleStore::default());
    let mut vehicle = stored_vehicle("v1");
    vehicle.last_updated = Utc::now() - Duration::minutes(5);
    vehicle.maintenance_records.push(MaintenanceRecord::new(MaintenanceDetails {
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        mileage: 30500,
        service_types: vec!["oil".to_string()],
        shop: "Quick Lube".to_string(),
    }));
    store.insert(vehicle);

    let response = get(app(store, Arc::new(MockProvider::default())), "/vehicles/v1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("5 minutes ago"));
    assert!(response.body.contains("Quick Lube"));
    assert!(response.body.contains("2024-01-15"));
}

#[tokio::test]
async fn test_fresh_vehicle_is_just_now() {
    let store = Arc::new(InMemoryVehicleStore::default());
    store.insert(stored_vehicle("v1"));

    let response = get(app(store, Arc::new(MockProvider::default())), "/vehicles/v1").await;

    assert!(response.body.contains("just now"));
}

#[tokio::test]
async fn test_root_redirects_to_list() {
    let store = Arc::new(InMemoryVehicleStore::default());

    let response = get(app(store, Arc::new(MockProvider::default())), "/").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/vehicles"));
}

#[tokio::test]
async fn test_health() {
    let store = Arc::new(InMemoryVehicleStore::default());

    let response = get(app(store, Arc::new(MockProvider::default())), "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "ok");
}
