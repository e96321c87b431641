//! Repositorio de vehículos
//!
//! `VehicleStore` es la costura entre la lógica de negocio y la base de
//! datos. La implementación PostgreSQL guarda los registros de
//! mantenimiento como un array JSONB en la misma fila, de modo que cada
//! mutación es una única sentencia atómica sobre el documento.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::models::{MaintenanceRecord, Vehicle, VehicleRefresh, VehicleRow, VehicleUpsert};
use crate::utils::errors::AppResult;

/// Operaciones de persistencia sobre vehículos y sus mantenimientos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Insertar o actualizar por `vehicle_id`; nunca toca los mantenimientos
    async fn upsert(&self, vehicle: VehicleUpsert) -> AppResult<Vehicle>;

    /// Actualizar VIN, kilometraje y fecha; `None` si el vehículo no existe
    async fn refresh(&self, vehicle_id: &str, refresh: VehicleRefresh) -> AppResult<Option<Vehicle>>;

    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_vehicle_id(&self, vehicle_id: &str) -> AppResult<Option<Vehicle>>;

    /// Añadir al final; `false` si el vehículo no existe
    async fn add_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool>;

    /// Reemplazar en sitio el registro con el mismo id; `false` si no se encontró
    async fn update_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool>;

    /// Eliminar el registro con ese id; `false` si no se encontró
    async fn delete_maintenance_record(&self, vehicle_id: &str, record_id: Uuid) -> AppResult<bool>;
}

const VEHICLE_COLUMNS: &str =
    "vehicle_id, make, model, year, vin, mileage, last_updated, maintenance_records";

#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for PgVehicleRepository {
    async fn upsert(&self, vehicle: VehicleUpsert) -> AppResult<Vehicle> {
        let vin = vehicle.stored_vin();

        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            INSERT INTO vehicles (vehicle_id, make, model, year, vin, mileage, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET make = EXCLUDED.make,
                model = EXCLUDED.model,
                year = EXCLUDED.year,
                vin = EXCLUDED.vin,
                mileage = EXCLUDED.mileage,
                last_updated = EXCLUDED.last_updated
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vehicle.vehicle_id)
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vin)
        .bind(vehicle.mileage)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn refresh(&self, vehicle_id: &str, refresh: VehicleRefresh) -> AppResult<Option<Vehicle>> {
        let vin = refresh.stored_vin();

        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            UPDATE vehicles
            SET mileage = $2, vin = $3, last_updated = $4
            WHERE vehicle_id = $1
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vehicle_id)
        .bind(refresh.mileage)
        .bind(vin)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles ORDER BY vehicle_id",
            VEHICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn find_by_vehicle_id(&self, vehicle_id: &str) -> AppResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles WHERE vehicle_id = $1",
            VEHICLE_COLUMNS
        ))
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn add_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET maintenance_records = maintenance_records || jsonb_build_array($2::jsonb)
            WHERE vehicle_id = $1
            "#,
        )
        .bind(vehicle_id)
        .bind(Json(record))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_maintenance_record(&self, vehicle_id: &str, record: MaintenanceRecord) -> AppResult<bool> {
        let record_id = record.id.to_string();

        // El orden del array se conserva gracias a WITH ORDINALITY
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET maintenance_records = (
                SELECT jsonb_agg(
                    CASE WHEN elem->>'id' = $2 THEN $3::jsonb ELSE elem END
                    ORDER BY idx
                )
                FROM jsonb_array_elements(maintenance_records) WITH ORDINALITY AS t(elem, idx)
            )
            WHERE vehicle_id = $1
              AND maintenance_records @> jsonb_build_array(jsonb_build_object('id', $2::text))
            "#,
        )
        .bind(vehicle_id)
        .bind(record_id)
        .bind(Json(record))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_maintenance_record(&self, vehicle_id: &str, record_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET maintenance_records = COALESCE(
                (
                    SELECT jsonb_agg(elem ORDER BY idx)
                    FROM jsonb_array_elements(maintenance_records) WITH ORDINALITY AS t(elem, idx)
                    WHERE elem->>'id' <> $2
                ),
                '[]'::jsonb
            )
            WHERE vehicle_id = $1
              AND maintenance_records @> jsonb_build_array(jsonb_build_object('id', $2::text))
            "#,
        )
        .bind(vehicle_id)
        .bind(record_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
