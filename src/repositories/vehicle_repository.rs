use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_validate::validate_mandatory_fields;

/// Errores del repositorio de vehículos
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("vehicle already exists")]
    AlreadyExists,

    #[error("vehicle missing mandatory fields")]
    MissingFields,

    #[error("vehicle not found")]
    VehicleNotFound,

    #[error("vehicles not found")]
    VehiclesNotFound,

    /// Fallo propio del backend de almacenamiento
    #[error("storage error: {0}")]
    Storage(String),
}

/// Operaciones de almacenamiento de vehículos.
///
/// Las lecturas devuelven siempre un mapa nuevo, nunca una referencia al
/// estado interno. Un backend persistente puede sustituir a [`VehicleMap`]
/// sin tocar servicio ni handlers.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> Result<HashMap<i64, Vehicle>, RepositoryError>;

    async fn create(&self, vehicle: &Vehicle) -> Result<(), RepositoryError>;

    /// Crea en orden y se detiene en el primer error; lo insertado antes queda guardado.
    async fn batch_create(&self, vehicles: &[Vehicle]) -> Result<(), RepositoryError>;

    async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError>;

    async fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError>;

    async fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        min_year: i32,
        max_year: i32,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError>;

    async fn update_fuel_type(&self, id: i64, fuel_type: &str) -> Result<(), RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Repositorio en memoria: un mapa `id -> Vehicle` protegido por un RwLock
#[derive(Debug, Default)]
pub struct VehicleMap {
    db: RwLock<HashMap<i64, Vehicle>>,
}

impl VehicleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear el repositorio a partir de datos iniciales
    pub fn with_vehicles(db: HashMap<i64, Vehicle>) -> Self {
        Self { db: RwLock::new(db) }
    }

    /// Filtrar el mapa con un predicado; un resultado vacío es `VehiclesNotFound`
    async fn find_where<F>(&self, predicate: F) -> Result<HashMap<i64, Vehicle>, RepositoryError>
    where
        F: Fn(&Vehicle) -> bool + Send,
    {
        let db = self.db.read().await;
        let found: HashMap<i64, Vehicle> = db
            .iter()
            .filter(|(_, vehicle)| predicate(vehicle))
            .map(|(id, vehicle)| (*id, vehicle.clone()))
            .collect();

        if found.is_empty() {
            return Err(RepositoryError::VehiclesNotFound);
        }
        Ok(found)
    }
}

/// Insertar sobre un mapa ya bloqueado para escritura
fn insert_vehicle(
    db: &mut HashMap<i64, Vehicle>,
    vehicle: &Vehicle,
) -> Result<(), RepositoryError> {
    validate_mandatory_fields(vehicle)?;
    if db.contains_key(&vehicle.id) {
        return Err(RepositoryError::AlreadyExists);
    }
    db.insert(vehicle.id, vehicle.clone());
    Ok(())
}

#[async_trait]
impl VehicleRepository for VehicleMap {
    async fn find_all(&self) -> Result<HashMap<i64, Vehicle>, RepositoryError> {
        Ok(self.db.read().await.clone())
    }

    async fn create(&self, vehicle: &Vehicle) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        insert_vehicle(&mut db, vehicle)?;
        debug!("Vehículo {} guardado, total: {}", vehicle.id, db.len());
        Ok(())
    }

    async fn batch_create(&self, vehicles: &[Vehicle]) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        for vehicle in vehicles {
            insert_vehicle(&mut db, vehicle)?;
        }
        debug!("Lote de {} vehículos guardado, total: {}", vehicles.len(), db.len());
        Ok(())
    }

    async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError> {
        self.find_where(|v| v.color == color && v.fabrication_year == year)
            .await
    }

    async fn find_by_weight_range(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError> {
        self.find_where(|v| v.weight >= min_weight && v.weight <= max_weight)
            .await
    }

    async fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        min_year: i32,
        max_year: i32,
    ) -> Result<HashMap<i64, Vehicle>, RepositoryError> {
        self.find_where(|v| {
            v.brand == brand && v.fabrication_year >= min_year && v.fabrication_year <= max_year
        })
        .await
    }

    async fn update_fuel_type(&self, id: i64, fuel_type: &str) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        let vehicle = db.get_mut(&id).ok_or(RepositoryError::VehicleNotFound)?;
        vehicle.fuel_type = fuel_type.to_string();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        db.remove(&id).ok_or(RepositoryError::VehicleNotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla(id: i64) -> Vehicle {
        Vehicle::new(
            id,
            "Toyota",
            "Corolla",
            "ABC-1234",
            "Blue",
            2020,
            5,
            180.0,
            "Gasoline",
            "Automatic",
            1300.0,
            1.45,
            4.62,
            1.77,
        )
    }

    fn fiesta(id: i64) -> Vehicle {
        Vehicle::new(
            id,
            "Ford",
            "Fiesta",
            "DEF-5678",
            "Red",
            2019,
            5,
            170.0,
            "Diesel",
            "Manual",
            1100.0,
            1.48,
            4.06,
            1.73,
        )
    }

    #[tokio::test]
    async fn test_create_rejects_zero_id() {
        let repo = VehicleMap::new();
        assert_eq!(repo.create(&corolla(0)).await, Err(RepositoryError::MissingFields));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_and_keeps_first() {
        let repo = VehicleMap::new();
        repo.create(&corolla(1001)).await.unwrap();

        let mut duplicate = fiesta(1001);
        duplicate.brand = "Otro".to_string();
        assert_eq!(repo.create(&duplicate).await, Err(RepositoryError::AlreadyExists));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[&1001], corolla(1001));
    }

    #[tokio::test]
    async fn test_find_all_returns_copy() {
        let repo = VehicleMap::new();
        repo.create(&corolla(1)).await.unwrap();

        let mut all = repo.find_all().await.unwrap();
        all.clear();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_batch_create_stops_at_first_error() {
        let repo = VehicleMap::new();
        repo.create(&fiesta(2)).await.unwrap();

        let result = repo.batch_create(&[corolla(1), fiesta(2), corolla(3)]).await;
        assert_eq!(result, Err(RepositoryError::AlreadyExists));

        let all = repo.find_all().await.unwrap();
        assert!(all.contains_key(&1));
        assert!(!all.contains_key(&3));
        assert_eq!(all[&2], fiesta(2));
    }

    #[tokio::test]
    async fn test_find_by_color_and_year() {
        let repo = VehicleMap::new();
        repo.batch_create(&[corolla(1), corolla(2), fiesta(3)]).await.unwrap();

        let found = repo.find_by_color_and_year("Blue", 2020).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[&1], corolla(1));
        assert_eq!(found[&2], corolla(2));

        // comparación exacta, sensible a mayúsculas
        assert_eq!(
            repo.find_by_color_and_year("blue", 2020).await,
            Err(RepositoryError::VehiclesNotFound)
        );
        assert_eq!(
            repo.find_by_color_and_year("Red", 2020).await,
            Err(RepositoryError::VehiclesNotFound)
        );
    }

    #[tokio::test]
    async fn test_find_by_weight_range_is_inclusive() {
        let repo = VehicleMap::new();
        repo.batch_create(&[corolla(1), fiesta(2)]).await.unwrap();

        let found = repo.find_by_weight_range(1100.0, 1300.0).await.unwrap();
        assert_eq!(found.len(), 2);

        let found = repo.find_by_weight_range(1100.0, 1299.9).await.unwrap();
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![2]);

        assert_eq!(
            repo.find_by_weight_range(1300.1, 5000.0).await,
            Err(RepositoryError::VehiclesNotFound)
        );
    }

    #[tokio::test]
    async fn test_find_by_brand_and_year_range() {
        let repo = VehicleMap::new();
        let mut old = corolla(3);
        old.fabrication_year = 2010;
        repo.batch_create(&[corolla(1), fiesta(2), old]).await.unwrap();

        let found = repo.find_by_brand_and_year_range("Toyota", 2015, 2020).await.unwrap();
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![1]);

        let found = repo.find_by_brand_and_year_range("Toyota", 2010, 2020).await.unwrap();
        assert_eq!(found.len(), 2);

        assert_eq!(
            repo.find_by_brand_and_year_range("Ford", 2020, 2024).await,
            Err(RepositoryError::VehiclesNotFound)
        );
    }

    #[tokio::test]
    async fn test_update_fuel_type_only_changes_fuel() {
        let repo = VehicleMap::new();
        repo.create(&corolla(1)).await.unwrap();

        repo.update_fuel_type(1, "Electric").await.unwrap();

        let mut expected = corolla(1);
        expected.fuel_type = "Electric".to_string();
        assert_eq!(repo.find_all().await.unwrap()[&1], expected);
    }

    #[tokio::test]
    async fn test_update_fuel_type_missing_id() {
        let repo = VehicleMap::new();
        repo.create(&corolla(1)).await.unwrap();

        assert_eq!(
            repo.update_fuel_type(2, "Electric").await,
            Err(RepositoryError::VehicleNotFound)
        );
        assert_eq!(repo.find_all().await.unwrap()[&1], corolla(1));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = VehicleMap::with_vehicles(HashMap::from([(1, corolla(1)), (2, fiesta(2))]));

        repo.delete(1).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert!(!all.contains_key(&1));
        assert!(all.contains_key(&2));

        assert_eq!(repo.delete(1).await, Err(RepositoryError::VehicleNotFound));
    }
}
