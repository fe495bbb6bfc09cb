use sqlx::SqlitePool;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        route_number: String,
        origin: String,
        destination: String,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (route_number, origin, destination)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(route_number)
        .bind(origin)
        .bind(destination)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn find_all(&self) -> Result<Vec<Route>, AppError> {
        let routes =
            sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY route_number ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(routes)
    }

    /// Busca la entrada exacta del catálogo (número + origen + destino)
    pub async fn find_by_details(
        &self,
        route_number: &str,
        origin: &str,
        destination: &str,
    ) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE route_number = ? AND origin = ? AND destination = ? LIMIT 1",
        )
        .bind(route_number)
        .bind(origin)
        .bind(destination)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }

    /// Búsqueda por subcadena sobre la etiqueta completa, sin distinguir
    /// mayúsculas (LIKE de SQLite)
    pub async fn search(&self, query: &str) -> Result<Vec<Route>, AppError> {
        let pattern = format!("%{}%", query);
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT * FROM routes
            WHERE (route_number || ' - ' || origin || ' → ' || destination) LIKE ?
            ORDER BY route_number ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
