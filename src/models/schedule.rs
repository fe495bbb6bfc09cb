//! Modelo de Schedule
//!
//! Una observación registrada de una salida de bus: hora de salida, ruta,
//! lugar de recogida y condiciones del bus. Mapea a la tabla `bus_schedule`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ocupación de asientos observada - se guarda como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Seating {
    Available,
    #[serde(rename = "Almost full")]
    #[sqlx(rename = "Almost full")]
    AlmostFull,
    Full,
    Loaded,
}

/// Código de tarifa del bus - multiplicador sobre la tarifa normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum FareTier {
    Normal,
    SemiLuxury,
    Luxury,
    Express,
}

impl FareTier {
    pub fn multiplier(&self) -> f64 {
        match self {
            FareTier::Normal => 1.0,
            FareTier::SemiLuxury => 1.5,
            FareTier::Luxury => 2.0,
            FareTier::Express => 4.0,
        }
    }

    /// Etiqueta para mostrar en el selector de tarifa
    pub fn label(&self) -> &'static str {
        match self {
            FareTier::Normal => "Normal (x1)",
            FareTier::SemiLuxury => "Semi-Luxury (x1.5)",
            FareTier::Luxury => "Luxury (x2)",
            FareTier::Express => "Express (x4)",
        }
    }
}

/// Atributos del bus observado. El sub-registro está presente o ausente
/// como un todo; sus campos internos son opcionales de forma independiente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusDetails {
    #[serde(rename = "type")]
    pub bus_type: Option<String>,
    pub tier: Option<FareTier>,
    pub rating: Option<f64>,
}

impl BusDetails {
    pub fn is_empty(&self) -> bool {
        self.bus_type.is_none() && self.tier.is_none() && self.rating.is_none()
    }
}

/// Schedule principal - una observación de salida de bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    /// Instante absoluto en milisegundos epoch. Para el ordenamiento solo
    /// cuenta la hora del día; el instante completo se guarda y se muestra.
    pub timestamp: i64,
    pub route: String,
    /// true = sentido normal, false = sentido invertido
    pub route_direction: bool,
    pub place: Option<String>,
    pub seating: Option<Seating>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub bus: Option<BusDetails>,
}

impl Schedule {
    /// Instante de salida como DateTime UTC, si el timestamp es representable
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
