use chrono::{Local, Utc};
use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::schedule_dto::{
    ApiResponse, CreateScheduleRequest, ScheduleResponse, TimelineResponse,
};
use crate::models::schedule::BusDetails;
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::services::timeline_service;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{validate_coordinates, validate_timestamp_millis};

pub struct ScheduleController {
    repository: ScheduleRepository,
}

impl ScheduleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ScheduleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleResponse>, AppError> {
        request.validate()?;

        // Validar campos que el derive no cubre
        if request.route.trim().is_empty() {
            return Err(AppError::BadRequest("La ruta es requerida".to_string()));
        }
        if validate_timestamp_millis(request.timestamp).is_err() {
            return Err(AppError::BadRequest(
                "El timestamp debe ser no negativo".to_string(),
            ));
        }
        if let (Some(lat), Some(lng)) = (request.latitude, request.longitude) {
            if validate_coordinates(lat, lng).is_err() {
                return Err(AppError::BadRequest("Coordenadas fuera de rango".to_string()));
            }
        }

        // El sub-registro del bus se guarda solo si llegó algún atributo
        let bus = BusDetails {
            bus_type: request.bus_type,
            tier: request.bus_tier,
            rating: request.bus_rating,
        };
        let bus = if bus.is_empty() { None } else { Some(bus) };

        let schedule = self
            .repository
            .create(
                request.timestamp,
                request.route,
                request.route_direction,
                request.place,
                request.seating,
                request.latitude,
                request.longitude,
                request.address,
                bus,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            schedule.into(),
            "Horario registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<ScheduleResponse>, AppError> {
        let schedules = self.repository.find_all().await?;
        Ok(schedules.into_iter().map(ScheduleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ScheduleResponse, AppError> {
        let schedule = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", id))?;

        Ok(schedule.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            return Err(not_found_error("Schedule", id));
        }
        Ok(())
    }

    /// Línea de tiempo: filtro de ruta opcional, luego orden y partición por
    /// hora del día respecto a "ahora". Trabaja sobre un snapshot del almacén
    /// y el instante de referencia se evalúa una sola vez por invocación.
    pub async fn timeline(
        &self,
        route: Option<String>,
        now: Option<i64>,
    ) -> Result<TimelineResponse, AppError> {
        let schedules = self.repository.find_all().await?;
        let now_ms = now.unwrap_or_else(|| Utc::now().timestamp_millis());

        let candidates = timeline_service::filter_by_route(schedules, route.as_deref());
        let timeline = timeline_service::build_timeline(candidates, now_ms, &Local);

        Ok(timeline.into())
    }

    pub async fn route_labels(&self) -> Result<Vec<String>, AppError> {
        self.repository.distinct_route_labels().await
    }
}
