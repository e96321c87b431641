use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use vehicle_tracker::clients::SmartcarClient;
use vehicle_tracker::config::EnvironmentConfig;
use vehicle_tracker::database::DatabaseConnection;
use vehicle_tracker::repositories::PgVehicleRepository;
use vehicle_tracker::services::RefreshScheduler;
use vehicle_tracker::{bind_listener, create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Tracker");
    info!("=================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos antes de atender peticiones
    let db_connection = match DatabaseConnection::new(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let store = Arc::new(PgVehicleRepository::new(db_connection.pool().clone()));
    let provider = Arc::new(SmartcarClient::new(config.smartcar.clone())?);
    let app_state = AppState::new(store, provider);

    if config.refresh_enabled() {
        RefreshScheduler::new(app_state.sync_service(), config.refresh_interval_hours).spawn();
    } else {
        info!("⏸️ Refresco programado desactivado");
    }

    let app = create_router(app_state);
    let listener = bind_listener(&config.server_url()).await?;

    info!("🌐 Servidor iniciando en http://{}", listener.local_addr()?);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /login - Iniciar autorización con el proveedor");
    info!("   GET  /callback - Callback OAuth");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   GET  /vehicles/:id - Detalle del vehículo");
    info!("   POST /vehicles/:id/maintenance - Añadir mantenimiento");
    info!("   POST /vehicles/:id/maintenance/:record_id/edit - Editar mantenimiento");
    info!("   POST /vehicles/:id/maintenance/:record_id/delete - Eliminar mantenimiento");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
