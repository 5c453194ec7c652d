//! Modelo de Vehicle
//!
//! Registro plano de un vehículo tal como lo guarda el repositorio.
//! La representación JSON vive en `dto::vehicle_dto`.

/// Vehículo identificado por un entero asignado por el cliente
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Capacidad de pasajeros
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl Vehicle {
    /// Crear un vehículo con todos sus atributos
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        brand: &str,
        model: &str,
        registration: &str,
        color: &str,
        fabrication_year: i32,
        capacity: i32,
        max_speed: f64,
        fuel_type: &str,
        transmission: &str,
        weight: f64,
        height: f64,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            id,
            brand: brand.to_string(),
            model: model.to_string(),
            registration: registration.to_string(),
            color: color.to_string(),
            fabrication_year,
            capacity,
            max_speed,
            fuel_type: fuel_type.to_string(),
            transmission: transmission.to_string(),
            weight,
            height,
            length,
            width,
        }
    }
}
