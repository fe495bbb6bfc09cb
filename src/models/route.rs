//! Modelo de Route
//!
//! Entrada del catálogo informal de rutas (número + origen + destino).
//! Solo se usa para pre-rellenar horarios nuevos; la relación con los
//! horarios es por texto, sin integridad referencial.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Route {
    pub id: i64,
    pub route_number: String,
    pub origin: String,
    pub destination: String,
}

impl Route {
    /// Etiqueta de ruta tal como se guarda en los horarios,
    /// p. ej. "1 - Colombo → Kandy"
    pub fn label(&self) -> String {
        format!("{} - {} → {}", self.route_number, self.origin, self.destination)
    }
}
