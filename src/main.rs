use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dotenvy::dotenv;
use nextbus_backend::config::environment::EnvironmentConfig;
use nextbus_backend::database::DatabaseConnection;
use nextbus_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use nextbus_backend::routes;
use nextbus_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 NextBus Backend - Registro de horarios de bus");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos local (SQLite)
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error abriendo la base de datos local: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.cors_origins.is_empty() || config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app: Router = routes::create_api_router()
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🕑 Horarios:");
    info!("   POST   /api/schedule - Registrar horario observado");
    info!("   GET    /api/schedule - Listar horarios (más recientes primero)");
    info!("   GET    /api/schedule/timeline - Línea de tiempo pasado/próximo");
    info!("   GET    /api/schedule/route-labels - Etiquetas de ruta únicas");
    info!("   GET    /api/schedule/:id - Obtener horario");
    info!("   DELETE /api/schedule/:id - Eliminar horario");
    info!("🚏 Catálogo de rutas:");
    info!("   POST   /api/route - Crear ruta");
    info!("   GET    /api/route - Listar rutas");
    info!("   GET    /api/route/search - Buscar rutas");
    info!("   DELETE /api/route/:id - Eliminar ruta");
    info!("📍 Ubicación:");
    info!("   GET    /api/location/reverse-geocode - Dirección desde coordenadas");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
