use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

// Representación JSON de un vehículo. Los campos ausentes toman su valor
// por defecto; un `id` ausente queda en 0 y el repositorio lo rechaza.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleJson {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<VehicleJson> for Vehicle {
    fn from(json: VehicleJson) -> Self {
        Vehicle {
            id: json.id,
            brand: json.brand,
            model: json.model,
            registration: json.registration,
            color: json.color,
            fabrication_year: json.fabrication_year,
            capacity: json.capacity,
            max_speed: json.max_speed,
            fuel_type: json.fuel_type,
            transmission: json.transmission,
            weight: json.weight,
            height: json.height,
            length: json.length,
            width: json.width,
        }
    }
}

impl From<Vehicle> for VehicleJson {
    fn from(v: Vehicle) -> Self {
        VehicleJson {
            id: v.id,
            brand: v.brand,
            model: v.model,
            registration: v.registration,
            color: v.color,
            fabrication_year: v.fabrication_year,
            capacity: v.capacity,
            max_speed: v.max_speed,
            fuel_type: v.fuel_type,
            transmission: v.transmission,
            weight: v.weight,
            height: v.height,
            length: v.length,
            width: v.width,
        }
    }
}

// Request para actualizar el combustible
#[derive(Debug, Deserialize)]
pub struct UpdateFuelTypeRequest {
    pub fuel_type: String,
}

// Query de rango de peso; se parsea a mano para responder con nuestro mensaje
#[derive(Debug, Deserialize)]
pub struct WeightRangeQuery {
    pub min: Option<String>,
    pub max: Option<String>,
}

// Response con mensaje y, opcionalmente, vehículos indexados por id
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<i64, VehicleJson>>,
}

impl ApiResponse {
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }

    pub fn with_vehicles(message: &str, vehicles: HashMap<i64, Vehicle>) -> Self {
        let data = vehicles
            .into_iter()
            .map(|(id, vehicle)| (id, VehicleJson::from(vehicle)))
            .collect();
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}
