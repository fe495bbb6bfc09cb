use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::route_dto::{CreateRouteRequest, RouteResponse};
use crate::dto::schedule_dto::ApiResponse;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        request.validate()?;

        if request.route_number.trim().is_empty()
            || request.origin.trim().is_empty()
            || request.destination.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "Número, origen y destino son requeridos".to_string(),
            ));
        }

        // Verificar que la tripleta exacta no exista ya en el catálogo
        if let Some(existing) = self
            .repository
            .find_by_details(&request.route_number, &request.origin, &request.destination)
            .await?
        {
            return Err(conflict_error("Route", &existing.label()));
        }

        let route = self
            .repository
            .create(request.route_number, request.origin, request.destination)
            .await?;

        Ok(ApiResponse::success_with_message(
            route.into(),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository.find_all().await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    /// Búsqueda del catálogo para el selector de rutas; sin query devuelve
    /// el catálogo completo
    pub async fn search(&self, query: Option<String>) -> Result<Vec<RouteResponse>, AppError> {
        let routes = match query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => self.repository.search(q).await?,
            _ => self.repository.find_all().await?,
        };

        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            return Err(not_found_error("Route", id));
        }
        Ok(())
    }
}
