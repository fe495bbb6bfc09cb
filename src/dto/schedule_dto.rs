use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::schedule::{FareTier, Schedule, Seating};
use crate::services::timeline_service::Timeline;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Request para registrar un horario observado. Campos planos como los
// entrega el formulario; los atributos del bus se agrupan al guardar.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub timestamp: i64,

    #[validate(length(min = 1, max = 200))]
    pub route: String,

    #[serde(default = "default_route_direction")]
    pub route_direction: bool,

    pub place: Option<String>,
    pub seating: Option<Seating>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub bus_type: Option<String>,
    pub bus_tier: Option<FareTier>,
    pub bus_rating: Option<f64>,
}

fn default_route_direction() -> bool {
    true
}

// Parámetros de la línea de tiempo: filtro de ruta opcional y un "ahora"
// opcional en milisegundos epoch (por defecto el reloj del servidor)
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub route: Option<String>,
    pub now: Option<i64>,
}

/// Response de los atributos del bus, con la tarifa expandida para mostrar
#[derive(Debug, Serialize)]
pub struct BusResponse {
    #[serde(rename = "type")]
    pub bus_type: Option<String>,
    pub tier: Option<FareTier>,
    pub tier_label: Option<&'static str>,
    pub fare_multiplier: Option<f64>,
    pub rating: Option<f64>,
}

/// Response de horario para la API
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub id: i64,
    pub timestamp: i64,
    pub departure_time: Option<String>,
    pub route: String,
    pub route_direction: bool,
    pub place: Option<String>,
    pub seating: Option<Seating>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub bus: Option<BusResponse>,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        let departure_time = schedule.departure_time().map(|dt| dt.to_rfc3339());
        Self {
            id: schedule.id,
            timestamp: schedule.timestamp,
            departure_time,
            route: schedule.route,
            route_direction: schedule.route_direction,
            place: schedule.place,
            seating: schedule.seating,
            location_lat: schedule.location_lat,
            location_lng: schedule.location_lng,
            location_address: schedule.location_address,
            bus: schedule.bus.map(|bus| BusResponse {
                bus_type: bus.bus_type,
                tier: bus.tier,
                tier_label: bus.tier.map(|t| t.label()),
                fare_multiplier: bus.tier.map(|t| t.multiplier()),
                rating: bus.rating,
            }),
        }
    }
}

/// Response de la línea de tiempo: pasado atenuado, próximo a énfasis
/// completo, y el índice del primer próximo en la lista concatenada
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub past: Vec<ScheduleResponse>,
    pub upcoming: Vec<ScheduleResponse>,
    pub focus_index: Option<usize>,
}

impl From<Timeline> for TimelineResponse {
    fn from(timeline: Timeline) -> Self {
        Self {
            past: timeline.past.into_iter().map(ScheduleResponse::from).collect(),
            upcoming: timeline
                .upcoming
                .into_iter()
                .map(ScheduleResponse::from)
                .collect(),
            focus_index: timeline.focus_index,
        }
    }
}
