mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚗 Car Rental - API de reservas");
    info!("================================");
    info!("⚙  Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS restringido solo en producción
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config);
    let addr: SocketAddr = app_state.config.server_url().parse()?;

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/client", routes::client_routes::create_client_router())
        .nest(
            "/api/car-category",
            routes::car_category_routes::create_car_category_router(),
        )
        .nest(
            "/api/manufacturer",
            routes::car_model_routes::create_manufacturer_router(),
        )
        .nest(
            "/api/car-model",
            routes::car_model_routes::create_car_model_router(),
        )
        .nest("/api/car", routes::car_routes::create_car_router())
        .nest(
            "/api/subsidiary",
            routes::subsidiary_routes::create_subsidiary_router(),
        )
        .nest("/api/rental", routes::rental_routes::create_rental_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Endpoints - Client:");
    info!("   POST /api/client - Registrar cliente");
    info!("   GET  /api/client - Listar clientes");
    info!("   GET  /api/client/:id - Obtener cliente");
    info!("🏷  Endpoints - CarCategory:");
    info!("   POST /api/car-category - Crear categoría");
    info!("   GET  /api/car-category - Listar categorías");
    info!("   GET  /api/car-category/:id - Obtener categoría");
    info!("🏭 Endpoints - Manufacturer / CarModel:");
    info!("   POST /api/manufacturer - Crear fabricante");
    info!("   GET  /api/manufacturer - Listar fabricantes");
    info!("   POST /api/car-model - Crear modelo");
    info!("   GET  /api/car-model - Listar modelos");
    info!("   GET  /api/car-model/:id - Obtener modelo");
    info!("🚙 Endpoints - Car:");
    info!("   POST /api/car - Dar de alta coche");
    info!("   GET  /api/car/:id - Obtener coche");
    info!("   PUT  /api/car/:id - Actualizar coche");
    info!("   DELETE /api/car/:id - Eliminar coche");
    info!("   GET  /api/car/subsidiary/:subsidiary_id - Coches por sucursal");
    info!("🏢 Endpoints - Subsidiary:");
    info!("   POST /api/subsidiary - Crear sucursal");
    info!("   GET  /api/subsidiary - Listar sucursales");
    info!("   GET  /api/subsidiary/:id - Obtener sucursal");
    info!("📅 Endpoints - Rental:");
    info!("   POST /api/rental - Reservar locación");
    info!("   GET  /api/rental - Listar locaciones");
    info!("   GET  /api/rental/:id - Obtener locación");
    info!("   GET  /api/rental/availability - Consultar disponibilidad");
    info!("   PUT  /api/rental/:id/start - Iniciar locación");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-rental",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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
