use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicle_api::config::environment::EnvironmentConfig;
use vehicle_api::create_app;
use vehicle_api::loader::vehicle_loader::load_vehicles;
use vehicle_api::repositories::vehicle_repository::VehicleMap;
use vehicle_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle API ({})", config.environment);
    info!("================================================");
    if config.is_development() && config.cors_origins.is_empty() {
        info!("🔓 CORS abierto a cualquier origen (modo desarrollo)");
    }

    // Poblar el repositorio si hay fichero de datos
    let repository = match &config.vehicles_file {
        Some(path) => match load_vehicles(path).await {
            Ok(vehicles) => VehicleMap::with_vehicles(vehicles),
            Err(e) => {
                error!("❌ Error cargando vehículos: {}", e);
                return Err(e.into());
            }
        },
        None => VehicleMap::new(),
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::with_repository(config, Arc::new(repository)));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /ping");
    info!("   GET    /vehicles");
    info!("   POST   /vehicles");
    info!("   POST   /vehicles/batch");
    info!("   GET    /vehicles/color/:color/year/:year");
    info!("   GET    /vehicles/weight?min=&max=");
    info!("   GET    /vehicles/brand/:brand/between/:start_year/:end_year");
    info!("   PUT    /vehicles/:id/fuel_type");
    info!("   DELETE /vehicles/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
