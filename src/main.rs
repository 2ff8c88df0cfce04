use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ev_charging_companion::config::{DatabaseConfig, EnvironmentConfig};
use ev_charging_companion::database::connect_store;
use ev_charging_companion::utils::SystemClock;
use ev_charging_companion::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging; RUST_LOG tiene prioridad sobre LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("⚡ EV Charging Companion ({})", config.environment);
    info!("================================================");

    let database = DatabaseConfig::from_env();
    let store = connect_store(database.as_ref()).await.map_err(|e| {
        error!("❌ Error inicializando el store: {}", e);
        e
    })?;

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(config, store, Arc::new(SystemClock))?;
    let app = create_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   GET  /api/catalog[/:model_id[/demo-history]]");
    info!("   GET|POST /api/users/:user_id/vehicles");
    info!("   PUT  /api/users/:user_id/vehicles/:id/{{battery,nickname}}");
    info!("   DELETE /api/users/:user_id/vehicles/:id");
    info!("   POST /api/users/:user_id/vehicles/:id/sessions");
    info!("   GET  /api/users/:user_id/vehicles/:id/reminders");
    info!("   GET  /api/vehicles/:id/{{sessions,stats}}");
    info!("   GET|PUT /api/users/:user_id/preferences");
    info!("   GET  /api/stations/nearby?lat=&lng=");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
