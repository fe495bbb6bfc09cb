//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! en la capa de entrada. El motor de línea de tiempo no valida nada:
//! la corrección de los datos es responsabilidad de esta capa.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

/// Validar que un timestamp en milisegundos epoch sea no negativo
pub fn validate_timestamp_millis(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("timestamp");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
