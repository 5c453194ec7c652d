//! Sistema de manejo de errores
//!
//! Este módulo define los errores que devuelven los handlers
//! y su conversión a respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::services::vehicle_service::ServiceError;

pub const MSG_MALFORMED_VEHICLE: &str = "Datos del vehículo mal formados o incompletos.";
pub const MSG_VEHICLE_EXISTS: &str = "Identificador del vehículo ya existente.";
pub const MSG_VEHICLE_NOT_FOUND: &str = "No se encontró el vehículo con ese identificador.";
pub const MSG_VEHICLES_NOT_FOUND: &str = "No se encontraron vehículos con esos criterios.";
pub const MSG_INTERNAL: &str = "Algo ha salido mal.";

/// Errores de la capa HTTP
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    status: String,
    message: String,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExists => AppError::Conflict(MSG_VEHICLE_EXISTS.to_string()),
            ServiceError::MissingFields => AppError::BadRequest(MSG_MALFORMED_VEHICLE.to_string()),
            ServiceError::VehicleNotFound => AppError::NotFound(MSG_VEHICLE_NOT_FOUND.to_string()),
            ServiceError::VehiclesNotFound => {
                AppError::NotFound(MSG_VEHICLES_NOT_FOUND.to_string())
            }
            ServiceError::InternalServer => AppError::Internal(MSG_INTERNAL.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            AppError::Internal(msg) => {
                error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorResponse {
            status: status.canonical_reason().unwrap_or_default().to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para los handlers
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_one_status_each() {
        let cases = [
            (ServiceError::AlreadyExists, StatusCode::CONFLICT),
            (ServiceError::MissingFields, StatusCode::BAD_REQUEST),
            (ServiceError::VehicleNotFound, StatusCode::NOT_FOUND),
            (ServiceError::VehiclesNotFound, StatusCode::NOT_FOUND),
            (ServiceError::InternalServer, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
