//! Modelos del sistema

pub mod vehicle;
