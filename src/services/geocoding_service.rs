//! Servicio de reverse geocoding
//!
//! Convierte coordenadas elegidas en el mapa en una dirección legible
//! usando la API de geocoding v6 de Mapbox.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReverseGeocodingResponse {
    pub success: bool,
    pub address: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MapboxGeocodingResponse {
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    properties: MapboxProperties,
}

#[derive(Debug, Deserialize)]
struct MapboxProperties {
    #[serde(rename = "full_address")]
    full_address: Option<String>,
    name: Option<String>,
    #[serde(rename = "place_name")]
    place_name: Option<String>,
}

pub struct GeocodingService {
    mapbox_token: String,
    client: reqwest::Client,
}

impl GeocodingService {
    pub fn new(mapbox_token: String, client: reqwest::Client) -> Self {
        Self {
            mapbox_token,
            client,
        }
    }

    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocodingResponse> {
        log::info!("🗺️ Reverse geocoding: {}, {}", latitude, longitude);

        // Construir la URL según la documentación oficial
        let url = format!(
            "https://api.mapbox.com/search/geocode/v6/reverse?longitude={}&latitude={}&access_token={}&limit=1",
            longitude, latitude, self.mapbox_token
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "NextBus/1.0")
            .send()
            .await?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Reverse geocoding failed with status {}: {}", status, error_text);
            return Ok(ReverseGeocodingResponse {
                success: false,
                address: None,
                error: Some(format!("Reverse geocoding failed: {}", status)),
            });
        }

        let mapbox_response: MapboxGeocodingResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse geocoding response: {}", e))?;

        // Extraer la primera feature (resultado más relevante)
        match mapbox_response.features.first() {
            Some(feature) => {
                let address = feature
                    .properties
                    .full_address
                    .clone()
                    .or_else(|| feature.properties.place_name.clone())
                    .or_else(|| feature.properties.name.clone());

                Ok(ReverseGeocodingResponse {
                    success: address.is_some(),
                    address,
                    error: None,
                })
            }
            None => Ok(ReverseGeocodingResponse {
                success: false,
                address: None,
                error: Some("No address found for these coordinates".to_string()),
            }),
        }
    }
}
