use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::services::geocoding_service::{GeocodingService, ReverseGeocodingResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_coordinates;

pub fn create_location_router() -> Router<AppState> {
    Router::new().route("/reverse-geocode", get(reverse_geocode))
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeQuery {
    latitude: f64,
    longitude: f64,
}

async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<ReverseGeocodeQuery>,
) -> Result<Json<ReverseGeocodingResponse>, AppError> {
    if validate_coordinates(params.latitude, params.longitude).is_err() {
        return Err(AppError::BadRequest("Coordenadas fuera de rango".to_string()));
    }

    let token = state.config.mapbox_token.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("MAPBOX_TOKEN no configurado".to_string())
    })?;

    let service = GeocodingService::new(token, state.http_client.clone());
    let response = service
        .reverse_geocode(params.latitude, params.longitude)
        .await
        .map_err(|e| AppError::ExternalApi(e.to_string()))?;

    Ok(Json(response))
}
