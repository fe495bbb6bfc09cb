use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::route::Route;

// Request para crear una ruta del catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 20))]
    pub route_number: String,

    #[validate(length(min = 1, max = 100))]
    pub origin: String,

    #[validate(length(min = 1, max = 100))]
    pub destination: String,
}

// Parámetros de búsqueda sobre el catálogo
#[derive(Debug, Deserialize)]
pub struct SearchRouteQuery {
    pub q: Option<String>,
}

/// Response de ruta con la etiqueta lista para pre-rellenar horarios
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: i64,
    pub route_number: String,
    pub origin: String,
    pub destination: String,
    pub label: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        let label = route.label();
        Self {
            id: route.id,
            route_number: route.route_number,
            origin: route.origin,
            destination: route.destination,
            label,
        }
    }
}
