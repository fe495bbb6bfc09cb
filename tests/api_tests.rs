//! Tests de integración de la API HTTP
//!
//! Levantan el router completo sobre una base SQLite en memoria con las
//! migraciones aplicadas y ejercitan los endpoints con requests reales.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use nextbus_backend::config::environment::EnvironmentConfig;
use nextbus_backend::routes;
use nextbus_backend::state::AppState;

// Función helper para crear la app de test
async fn create_test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let config = EnvironmentConfig {
        environment: "development".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3000,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: Vec::new(),
        mapbox_token: None,
    };

    routes::create_api_router().with_state(AppState::new(pool, config))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn schedule_body(timestamp: i64, route: &str) -> Value {
    json!({
        "timestamp": timestamp,
        "route": route,
        "place": "Parada central",
    })
}

#[tokio::test]
async fn test_list_schedules_empty() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/api/schedule").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_and_fetch_schedule() {
    let app = create_test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/schedule",
        json!({
            "timestamp": 1_750_000_000_000i64,
            "route": "1 - Colombo → Kandy",
            "place": "Pettah",
            "seating": "Almost full",
            "latitude": 6.9271,
            "longitude": 79.8612,
            "address": "Olcott Mawatha, Colombo",
            "bus_type": "SLTB",
            "bus_tier": "semi_luxury",
            "bus_rating": 4.5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["seating"], "Almost full");
    assert_eq!(body["data"]["bus"]["tier"], "semi_luxury");
    assert_eq!(body["data"]["bus"]["fare_multiplier"], 1.5);
    assert_eq!(body["data"]["bus"]["tier_label"], "Semi-Luxury (x1.5)");

    let (status, fetched) = get(&app, &format!("/api/schedule/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["route"], "1 - Colombo → Kandy");
    assert_eq!(fetched["route_direction"], true);
    assert!(fetched["departure_time"].is_string());
}

#[tokio::test]
async fn test_schedule_without_bus_details_has_null_bus() {
    let app = create_test_app().await;

    let (status, body) =
        post_json(&app, "/api/schedule", schedule_body(1_750_000_000_000, "10A")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["bus"].is_null());
}

#[tokio::test]
async fn test_create_schedule_rejects_empty_route() {
    let app = create_test_app().await;

    let (status, _) = post_json(&app, "/api/schedule", schedule_body(1_000, "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_schedule_rejects_negative_timestamp() {
    let app = create_test_app().await;

    let (status, _) = post_json(&app, "/api/schedule", schedule_body(-5, "10A")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_schedule() {
    let app = create_test_app().await;

    let (_, body) = post_json(&app, "/api/schedule", schedule_body(1_000, "10A")).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = delete(&app, &format!("/api/schedule/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = get(&app, &format!("/api/schedule/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_schedule_returns_404() {
    let app = create_test_app().await;
    let (status, _) = delete(&app, "/api/schedule/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_timeline_partitions_all_records() {
    let app = create_test_app().await;

    for (ts, route) in [
        (1_750_000_000_000i64, "10A"),
        (1_750_020_000_000i64, "10A"),
        (1_750_040_000_000i64, "20B"),
    ] {
        let (status, _) = post_json(&app, "/api/schedule", schedule_body(ts, route)).await;
        assert_eq!(status, StatusCode::OK);
    }

    // La partición depende de la zona horaria local del servidor, así que
    // aquí se verifican las propiedades estructurales, no el corte exacto
    let (status, body) = get(&app, "/api/schedule/timeline?now=1750030000000").await;
    assert_eq!(status, StatusCode::OK);

    let past = body["past"].as_array().unwrap();
    let upcoming = body["upcoming"].as_array().unwrap();
    assert_eq!(past.len() + upcoming.len(), 3);

    if upcoming.is_empty() {
        assert!(body["focus_index"].is_null());
    } else {
        assert_eq!(body["focus_index"].as_u64().unwrap() as usize, past.len());
    }
}

#[tokio::test]
async fn test_timeline_route_filter() {
    let app = create_test_app().await;

    for (ts, route) in [
        (1_750_000_000_000i64, "10A"),
        (1_750_020_000_000i64, "20B"),
        (1_750_040_000_000i64, "10A"),
    ] {
        post_json(&app, "/api/schedule", schedule_body(ts, route)).await;
    }

    let (status, body) = get(&app, "/api/schedule/timeline?route=10A").await;
    assert_eq!(status, StatusCode::OK);

    let past = body["past"].as_array().unwrap();
    let upcoming = body["upcoming"].as_array().unwrap();
    assert_eq!(past.len() + upcoming.len(), 2);
    for entry in past.iter().chain(upcoming.iter()) {
        assert_eq!(entry["route"], "10A");
    }
}

#[tokio::test]
async fn test_route_labels_are_distinct_and_sorted() {
    let app = create_test_app().await;

    for (ts, route) in [
        (1_000i64, "20B"),
        (2_000i64, "10A"),
        (3_000i64, "10A"),
    ] {
        post_json(&app, "/api/schedule", schedule_body(ts, route)).await;
    }

    let (status, body) = get(&app, "/api/schedule/route-labels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["10A", "20B"]));
}

#[tokio::test]
async fn test_route_catalog_seeded() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/route").await;
    assert_eq!(status, StatusCode::OK);

    let routes = body.as_array().unwrap();
    assert!(!routes.is_empty());
    assert!(routes
        .iter()
        .any(|r| r["label"] == "1 - Colombo → Kandy"));
}

#[tokio::test]
async fn test_create_route_and_reject_duplicate() {
    let app = create_test_app().await;

    let request = json!({
        "route_number": "99",
        "origin": "Colombo",
        "destination": "Badulla"
    });

    let (status, body) = post_json(&app, "/api/route", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["label"], "99 - Colombo → Badulla");

    let (status, _) = post_json(&app, "/api/route", request).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_search_routes() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/api/route/search?q=kandy").await;
    assert_eq!(status, StatusCode::OK);

    let routes = body.as_array().unwrap();
    assert!(!routes.is_empty());
    for route in routes {
        let label = route["label"].as_str().unwrap().to_lowercase();
        assert!(label.contains("kandy"));
    }
}

#[tokio::test]
async fn test_delete_route() {
    let app = create_test_app().await;

    let (_, body) = get(&app, "/api/route").await;
    let id = body.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let (status, _) = delete(&app, &format!("/api/route/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/api/route/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reverse_geocode_without_token_is_unavailable() {
    let app = create_test_app().await;

    let (status, _) = get(
        &app,
        "/api/location/reverse-geocode?latitude=6.9271&longitude=79.8612",
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_reverse_geocode_rejects_bad_coordinates() {
    let app = create_test_app().await;

    let (status, _) = get(
        &app,
        "/api/location/reverse-geocode?latitude=95.0&longitude=79.8612",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
