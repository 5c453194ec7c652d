//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::vehicle_service::{VehicleDefault, VehicleService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicle_service: Arc<dyn VehicleService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, vehicle_service: Arc<dyn VehicleService>) -> Self {
        Self {
            config,
            vehicle_service,
        }
    }

    /// Montar el servicio por defecto sobre un repositorio
    pub fn with_repository(
        config: EnvironmentConfig,
        repository: Arc<dyn VehicleRepository>,
    ) -> Self {
        Self::new(config, Arc::new(VehicleDefault::new(repository)))
    }
}
