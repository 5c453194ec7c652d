use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::{RepositoryError, VehicleRepository};

/// Errores que el servicio expone a los handlers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("vehicle already exists")]
    AlreadyExists,

    #[error("vehicle missing mandatory fields")]
    MissingFields,

    #[error("vehicle not found")]
    VehicleNotFound,

    #[error("vehicles not found")]
    VehiclesNotFound,

    #[error("internal server error")]
    InternalServer,
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => ServiceError::AlreadyExists,
            RepositoryError::MissingFields => ServiceError::MissingFields,
            RepositoryError::VehicleNotFound => ServiceError::VehicleNotFound,
            RepositoryError::VehiclesNotFound => ServiceError::VehiclesNotFound,
            RepositoryError::Storage(msg) => {
                error!("❌ Error de almacenamiento: {}", msg);
                ServiceError::InternalServer
            }
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operaciones de negocio sobre vehículos
#[async_trait]
pub trait VehicleService: Send + Sync {
    async fn find_all(&self) -> ServiceResult<HashMap<i64, Vehicle>>;

    async fn create(&self, vehicle: Vehicle) -> ServiceResult<()>;

    async fn batch_create(&self, vehicles: Vec<Vehicle>) -> ServiceResult<()>;

    async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> ServiceResult<HashMap<i64, Vehicle>>;

    async fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> ServiceResult<HashMap<i64, Vehicle>>;

    async fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        min_year: i32,
        max_year: i32,
    ) -> ServiceResult<HashMap<i64, Vehicle>>;

    async fn update_fuel_type(&self, id: i64, fuel_type: &str) -> ServiceResult<()>;

    async fn delete(&self, id: i64) -> ServiceResult<()>;
}

/// Implementación por defecto: delega en el repositorio y normaliza errores
pub struct VehicleDefault {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleDefault {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }
}

/// Registrar el error de repositorio y convertirlo
fn normalize(operation: &str, err: RepositoryError) -> ServiceError {
    warn!("⚠️ {} falló: {}", operation, err);
    ServiceError::from(err)
}

#[async_trait]
impl VehicleService for VehicleDefault {
    async fn find_all(&self) -> ServiceResult<HashMap<i64, Vehicle>> {
        let vehicles = self
            .repository
            .find_all()
            .await
            .map_err(|e| normalize("find_all", e))?;
        debug!("📋 {} vehículos listados", vehicles.len());
        Ok(vehicles)
    }

    async fn create(&self, vehicle: Vehicle) -> ServiceResult<()> {
        self.repository
            .create(&vehicle)
            .await
            .map_err(|e| normalize("create", e))?;
        debug!("✅ Vehículo {} creado", vehicle.id);
        Ok(())
    }

    async fn batch_create(&self, vehicles: Vec<Vehicle>) -> ServiceResult<()> {
        self.repository
            .batch_create(&vehicles)
            .await
            .map_err(|e| normalize("batch_create", e))?;
        debug!("✅ Lote de {} vehículos creado", vehicles.len());
        Ok(())
    }

    async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> ServiceResult<HashMap<i64, Vehicle>> {
        self.repository
            .find_by_color_and_year(color, year)
            .await
            .map_err(|e| normalize("find_by_color_and_year", e))
    }

    async fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> ServiceResult<HashMap<i64, Vehicle>> {
        self.repository
            .find_by_weight_range(min_weight, max_weight)
            .await
            .map_err(|e| normalize("find_by_weight_range", e))
    }

    async fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        min_year: i32,
        max_year: i32,
    ) -> ServiceResult<HashMap<i64, Vehicle>> {
        self.repository
            .find_by_brand_and_year_range(brand, min_year, max_year)
            .await
            .map_err(|e| normalize("find_by_brand_and_year_range", e))
    }

    async fn update_fuel_type(&self, id: i64, fuel_type: &str) -> ServiceResult<()> {
        self.repository
            .update_fuel_type(id, fuel_type)
            .await
            .map_err(|e| normalize("update_fuel_type", e))?;
        debug!("⛽ Combustible del vehículo {} actualizado a '{}'", id, fuel_type);
        Ok(())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| normalize("delete", e))?;
        debug!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}
