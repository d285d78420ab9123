use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_price_estimator::config::EnvironmentConfig;
use car_price_estimator::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Price Estimator - Formulario web");
    info!("======================================");

    let config = EnvironmentConfig::from_env()?;
    info!("🔮 Servicio de predicción: {}", config.service.base_url);

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config).map_err(|e| {
        error!("❌ Error creando los clientes HTTP: {}", e);
        anyhow::anyhow!("Error de cliente HTTP: {}", e)
    })?;

    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /                          - Formulario (opcional ?makeId=)");
    info!("   POST /evaluate                  - Enviar el formulario");
    info!("   GET  /api/options/:select_id    - Opciones de un desplegable");
    info!("   GET  /api/model-options/:make_id - Modelos de una marca");
    info!("   GET  /health                    - Health check");

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
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
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
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
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
