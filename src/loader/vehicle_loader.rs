//! Carga inicial de vehículos desde un fichero JSON
//!
//! El fichero contiene un array de vehículos en el mismo formato que
//! expone la API.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::dto::vehicle_dto::VehicleJson;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_validate::validate_mandatory_fields;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Registro sin identificador (o con `id` igual a 0)
    #[error("record {index} in {path} is missing mandatory fields")]
    MissingFields { path: String, index: usize },
}

/// Leer los vehículos del fichero. Si un id se repite gana la última aparición.
pub async fn load_vehicles(path: impl AsRef<Path>) -> Result<HashMap<i64, Vehicle>, LoaderError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoaderError::Io {
            path: path_str.clone(),
            source,
        })?;

    let records: Vec<VehicleJson> =
        serde_json::from_str(&raw).map_err(|source| LoaderError::Parse {
            path: path_str.clone(),
            source,
        })?;

    let mut vehicles = HashMap::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let vehicle = Vehicle::from(record);
        validate_mandatory_fields(&vehicle).map_err(|_| LoaderError::MissingFields {
            path: path_str.clone(),
            index,
        })?;
        vehicles.insert(vehicle.id, vehicle);
    }

    info!("📂 {} vehículos cargados desde {}", vehicles.len(), path_str);
    Ok(vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("vehicle-loader-{}-{}.json", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_vehicles() {
        let path = temp_file(
            "ok",
            r#"[
                {"id": 1, "brand": "Toyota", "model": "Corolla", "color": "Blue",
                 "year": 2020, "passengers": 5, "max_speed": 180, "weight": 1300},
                {"id": 2, "brand": "Ford", "model": "Fiesta", "color": "Red",
                 "year": 2019, "passengers": 5, "max_speed": 170, "weight": 1100},
                {"id": 2, "brand": "Ford", "model": "Focus", "color": "Red",
                 "year": 2021, "passengers": 5, "max_speed": 190, "weight": 1250}
            ]"#,
        );

        let vehicles = load_vehicles(&path).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[&1].fabrication_year, 2020);
        assert_eq!(vehicles[&2].model, "Focus");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_vehicles("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let path = temp_file("bad", "{ not json");
        let err = load_vehicles(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, LoaderError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_zero_or_absent_id_is_rejected() {
        let path = temp_file("zero-id", r#"[{"id": 1, "brand": "Toyota"}, {"id": 0}]"#);
        let err = load_vehicles(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoaderError::MissingFields { index: 1, .. }));

        let path = temp_file("no-id", r#"[{"brand": "Ford", "year": 2019}]"#);
        let err = load_vehicles(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoaderError::MissingFields { index: 0, .. }));
    }
}
