//! Refresco programado de vehículos
//!
//! Se ejecuta en las horas UTC múltiplo del intervalo, en punto
//! (con 12 horas: 00:00 y 12:00). Cada ejecución corre en su propia
//! tarea de tokio.

use chrono::{DateTime, Duration, Timelike, Utc};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::vehicle_sync_service::{RefreshSummary, VehicleSyncService};

/// Siguiente instante de ejecución estrictamente posterior a `now`
pub fn next_run_after(now: DateTime<Utc>, interval_hours: u32) -> DateTime<Utc> {
    let interval = interval_hours.max(1);
    let start_of_hour = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let mut candidate = start_of_hour + Duration::hours(1);
    while candidate.hour() % interval != 0 {
        candidate += Duration::hours(1);
    }
    candidate
}

/// Siguiente ejecución tras la programada en `previous`. El reloj de
/// pared puede ir por detrás de `previous` al despertar, así que nunca
/// se calcula desde un instante anterior a ella.
pub fn next_run_following(
    now: DateTime<Utc>,
    previous: Option<DateTime<Utc>>,
    interval_hours: u32,
) -> DateTime<Utc> {
    let from = previous.map_or(now, |previous| previous.max(now));
    next_run_after(from, interval_hours)
}

#[derive(Clone)]
pub struct RefreshScheduler {
    sync: VehicleSyncService,
    interval_hours: u32,
}

impl RefreshScheduler {
    pub fn new(sync: VehicleSyncService, interval_hours: u32) -> Self {
        Self { sync, interval_hours }
    }

    /// Arrancar el bucle del programador en segundo plano
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        info!("⏰ Refresco programado cada {} horas", self.interval_hours);

        let mut previous = None;
        loop {
            let now = Utc::now();
            let next = next_run_following(now, previous, self.interval_hours);
            info!("⏰ Próximo refresco: {}", next.to_rfc3339());

            let wait = (next - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;
            previous = Some(next);

            let scheduler = self.clone();
            tokio::spawn(async move {
                scheduler.run_once().await;
            });
        }
    }

    /// Una ejecución del refresco; los errores solo se registran
    pub async fn run_once(&self) -> Option<RefreshSummary> {
        info!("🔄 Ejecutando el refresco programado de vehículos...");

        match self.sync.refresh_all().await {
            Ok(summary) => {
                info!(
                    "✅ Refresco programado terminado: {} actualizados, {} fallidos",
                    summary.updated, summary.failed
                );
                Some(summary)
            }
            Err(e) => {
                error!("❌ Error en el refresco programado: {}", e);
                None
            }
        }
    }
}
