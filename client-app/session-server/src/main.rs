use std::net::SocketAddr;

use tracing::{error, info};

use session_api::{build_router, AppState};
use session_shared::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = AppConfig::load();

    // Initialize telemetry
    let format = config.as_ref().map(|c| c.log.format).unwrap_or_default();
    session_shared::telemetry::init_telemetry(format);

    info!("Cookie session server starting...");

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Environment: {}, frontend: {}, cookie domain: {:?}",
        config.server.env, config.frontend.url, config.cookie.domain
    );

    // Bind address
    let host: std::net::IpAddr = match config.server.host.parse() {
        Ok(host) => host,
        Err(e) => {
            error!("Invalid server host {:?}: {}", config.server.host, e);
            std::process::exit(1);
        }
    };
    let addr = SocketAddr::from((host, config.server.port));

    // Build router
    let app = match AppState::new(config).and_then(build_router) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to build router: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
