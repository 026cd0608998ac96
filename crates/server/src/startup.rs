use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: connect the database, build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let app = routes::build_router(ServerState::new(db), build_cors());

    let host = cfg.server.host.as_str();
    if host.is_empty() {
        return Err(StartupError::InvalidConfig("server.host is empty".into()));
    }
    let listener = tokio::net::TcpListener::bind((host, cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
