pub mod vehicle_repository;
pub mod vehicle_validate;
