//! Conexión al almacén SQLite local
//!
//! Este módulo abre el pool de conexiones y aplica las migraciones
//! embebidas al arrancar.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::config::database::DatabaseConfig;

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir la base de datos con la configuración dada y aplicar migraciones
    pub async fn new(config: DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        run_migrations(&pool).await?;

        info!("✅ Base de datos lista en {}", config.url);
        Ok(Self { pool })
    }

    /// Abrir la base de datos con la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        Self::new(DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Ejecutar migraciones embebidas de la base de datos
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
