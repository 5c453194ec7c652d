//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios envuelven al repositorio y normalizan sus errores.

pub mod vehicle_service;

pub use vehicle_service::*;
