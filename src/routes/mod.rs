//! Rutas de la API
//!
//! Un router por recurso, anidados bajo /api.

pub mod location_routes;
pub mod route_routes;
pub mod schedule_routes;

use axum::Router;

use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/schedule", schedule_routes::create_schedule_router())
        .nest("/api/route", route_routes::create_route_router())
        .nest("/api/location", location_routes::create_location_router())
}
