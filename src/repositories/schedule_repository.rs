use sqlx::SqlitePool;

use crate::models::schedule::{BusDetails, FareTier, Schedule, Seating};
use crate::utils::errors::AppError;

// Fila plana tal como está en la tabla `bus_schedule`; las columnas bus_*
// se agrupan en el sub-registro del modelo al salir de la base
#[derive(Debug, sqlx::FromRow)]
struct ScheduleRow {
    id: i64,
    timestamp: i64,
    route: String,
    route_direction: bool,
    place: Option<String>,
    seating: Option<Seating>,
    location_lat: Option<f64>,
    location_lng: Option<f64>,
    location_address: Option<String>,
    bus_type: Option<String>,
    bus_tier: Option<FareTier>,
    bus_rating: Option<f64>,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        let bus = BusDetails {
            bus_type: row.bus_type,
            tier: row.bus_tier,
            rating: row.bus_rating,
        };

        Schedule {
            id: row.id,
            timestamp: row.timestamp,
            route: row.route,
            route_direction: row.route_direction,
            place: row.place,
            seating: row.seating,
            location_lat: row.location_lat,
            location_lng: row.location_lng,
            location_address: row.location_address,
            bus: if bus.is_empty() { None } else { Some(bus) },
        }
    }
}

pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        timestamp: i64,
        route: String,
        route_direction: bool,
        place: Option<String>,
        seating: Option<Seating>,
        location_lat: Option<f64>,
        location_lng: Option<f64>,
        location_address: Option<String>,
        bus: Option<BusDetails>,
    ) -> Result<Schedule, AppError> {
        let (bus_type, bus_tier, bus_rating) = match bus {
            Some(b) => (b.bus_type, b.tier, b.rating),
            None => (None, None, None),
        };

        let row = sqlx::query_as::<_, ScheduleRow>(
            r#"
            INSERT INTO bus_schedule
                (timestamp, route, route_direction, place, seating,
                 location_lat, location_lng, location_address,
                 bus_type, bus_tier, bus_rating)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(timestamp)
        .bind(route)
        .bind(route_direction)
        .bind(place)
        .bind(seating)
        .bind(location_lat)
        .bind(location_lng)
        .bind(location_address)
        .bind(bus_type)
        .bind(bus_tier)
        .bind(bus_rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_all(&self) -> Result<Vec<Schedule>, AppError> {
        let rows = sqlx::query_as::<_, ScheduleRow>(
            "SELECT * FROM bus_schedule ORDER BY timestamp DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Schedule::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Schedule>, AppError> {
        let row = sqlx::query_as::<_, ScheduleRow>("SELECT * FROM bus_schedule WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Schedule::from))
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bus_schedule WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Etiquetas de ruta únicas entre los horarios guardados,
    /// para los chips de filtro de la lista
    pub async fn distinct_route_labels(&self) -> Result<Vec<String>, AppError> {
        let labels =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT route FROM bus_schedule ORDER BY route ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(labels)
    }
}
