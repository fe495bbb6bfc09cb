use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::schedule_dto::{
    ApiResponse, CreateScheduleRequest, ScheduleResponse, TimelineQuery, TimelineResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_schedule))
        .route("/", get(list_schedules))
        .route("/timeline", get(get_timeline))
        .route("/route-labels", get(get_route_labels))
        .route("/:id", get(get_schedule))
        .route("/:id", delete(delete_schedule))
}

async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<Json<ApiResponse<ScheduleResponse>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.timeline(params.route, params.now).await?;
    Ok(Json(response))
}

async fn get_route_labels(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.route_labels().await?;
    Ok(Json(response))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Horario eliminado exitosamente"
    })))
}
