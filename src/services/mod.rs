//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el motor de
//! línea de tiempo (ordenamiento y partición por hora del día) y la
//! integración de reverse geocoding.

pub mod geocoding_service;
pub mod timeline_service;

pub use geocoding_service::*;
pub use timeline_service::*;
