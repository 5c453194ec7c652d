use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{debug, info};

use crate::dto::vehicle_dto::{ApiResponse, UpdateFuelTypeRequest, VehicleJson, WeightRangeQuery};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult, MSG_MALFORMED_VEHICLE};

const MSG_VEHICLE_CREATED: &str = "Vehículo creado exitosamente.";
const MSG_VEHICLES_CREATED: &str = "Vehículos creados exitosamente.";
const MSG_VEHICLES_FOUND: &str = "Vehículos encontrados exitosamente.";
const MSG_FUEL_UPDATED: &str = "Tipo de combustible actualizado exitosamente.";
const MSG_MALFORMED_ID: &str = "Identificador mal formado.";
const MSG_MALFORMED_PARAMS: &str = "Parámetros de búsqueda mal formados.";
const MSG_MALFORMED_YEAR: &str = "Año mal formado.";
const MSG_MALFORMED_YEAR_RANGE: &str = "Rango de años mal formado.";
const MSG_MALFORMED_WEIGHT_RANGE: &str = "Rango de peso mal formado.";
const MSG_MALFORMED_FUEL_TYPE: &str = "Tipo de combustible mal formado.";

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create_vehicle))
        .route("/batch", post(batch_create))
        .route("/color/:color/year/:year", get(get_by_color_and_year))
        .route("/weight", get(get_by_weight_range))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(get_by_brand_and_year_range),
        )
        .route("/:id/fuel_type", put(update_fuel_type))
        .route("/:id", delete(delete_vehicle))
}

/// Parsear un parámetro numérico o devolver 400 con el mensaje dado.
/// No se recortan espacios: `" 2020"` es un año mal formado.
fn parse_param<T: std::str::FromStr>(raw: &str, message: &str) -> AppResult<T> {
    raw.parse().map_err(|_| bad_request_error(message))
}

/// Convertir el rechazo de un extractor en un 400 con nuestro mensaje
fn rejected(rejection: impl std::fmt::Display, message: &str) -> AppError {
    debug!("Solicitud rechazada: {}", rejection);
    bad_request_error(message)
}

/// GET /vehicles
async fn get_all(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let vehicles = state.vehicle_service.find_all().await?;
    Ok(Json(ApiResponse::with_vehicles("success", vehicles)))
}

/// POST /vehicles
async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleJson>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    let Json(request) = payload.map_err(|e| rejected(e, MSG_MALFORMED_VEHICLE))?;

    let id = request.id;
    state.vehicle_service.create(Vehicle::from(request)).await?;
    info!("🚗 Vehículo {} creado", id);

    Ok((StatusCode::CREATED, Json(ApiResponse::message(MSG_VEHICLE_CREATED))))
}

/// POST /vehicles/batch
async fn batch_create(
    State(state): State<AppState>,
    payload: Result<Json<Vec<VehicleJson>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    let Json(request) = payload.map_err(|e| rejected(e, MSG_MALFORMED_VEHICLE))?;

    let count = request.len();
    let vehicles = request.into_iter().map(Vehicle::from).collect();
    state.vehicle_service.batch_create(vehicles).await?;
    info!("🚗 Lote de {} vehículos creado", count);

    Ok((StatusCode::CREATED, Json(ApiResponse::message(MSG_VEHICLES_CREATED))))
}

/// GET /vehicles/color/:color/year/:year
async fn get_by_color_and_year(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Path((color, year)) = path.map_err(|e| rejected(e, MSG_MALFORMED_PARAMS))?;
    let year: i32 = parse_param(&year, MSG_MALFORMED_YEAR)?;

    let vehicles = state
        .vehicle_service
        .find_by_color_and_year(&color, year)
        .await?;
    Ok(Json(ApiResponse::with_vehicles(MSG_VEHICLES_FOUND, vehicles)))
}

/// GET /vehicles/weight?min=&max=
async fn get_by_weight_range(
    State(state): State<AppState>,
    query: Result<Query<WeightRangeQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query.map_err(|e| rejected(e, MSG_MALFORMED_WEIGHT_RANGE))?;
    let min: f64 = parse_param(
        query.min.as_deref().unwrap_or_default(),
        MSG_MALFORMED_WEIGHT_RANGE,
    )?;
    let max: f64 = parse_param(
        query.max.as_deref().unwrap_or_default(),
        MSG_MALFORMED_WEIGHT_RANGE,
    )?;

    let vehicles = state.vehicle_service.find_by_weight_range(min, max).await?;
    Ok(Json(ApiResponse::with_vehicles(MSG_VEHICLES_FOUND, vehicles)))
}

/// GET /vehicles/brand/:brand/between/:start_year/:end_year
async fn get_by_brand_and_year_range(
    State(state): State<AppState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Path((brand, start_year, end_year)) = path.map_err(|e| rejected(e, MSG_MALFORMED_PARAMS))?;
    let start_year: i32 = parse_param(&start_year, MSG_MALFORMED_YEAR_RANGE)?;
    let end_year: i32 = parse_param(&end_year, MSG_MALFORMED_YEAR_RANGE)?;

    let vehicles = state
        .vehicle_service
        .find_by_brand_and_year_range(&brand, start_year, end_year)
        .await?;
    Ok(Json(ApiResponse::with_vehicles(MSG_VEHICLES_FOUND, vehicles)))
}

/// PUT /vehicles/:id/fuel_type
async fn update_fuel_type(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateFuelTypeRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Path(id) = path.map_err(|e| rejected(e, MSG_MALFORMED_ID))?;
    let id: i64 = parse_param(&id, MSG_MALFORMED_ID)?;
    let Json(request) = payload.map_err(|e| rejected(e, MSG_MALFORMED_FUEL_TYPE))?;

    state
        .vehicle_service
        .update_fuel_type(id, &request.fuel_type)
        .await?;
    Ok(Json(ApiResponse::message(MSG_FUEL_UPDATED)))
}

/// DELETE /vehicles/:id
async fn delete_vehicle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path.map_err(|e| rejected(e, MSG_MALFORMED_ID))?;
    let id: i64 = parse_param(&id, MSG_MALFORMED_ID)?;

    state.vehicle_service.delete(id).await?;
    info!("🗑️ Vehículo {} eliminado", id);
    Ok(StatusCode::NO_CONTENT)
}
