use std::{future::Future, net::SocketAddr};

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::{AppConfig, ServerConfig};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    run_with_shutdown(shutdown_signal()).await
}

/// Build the app and serve until `signal` resolves. In-flight requests finish first.
pub async fn run_with_shutdown<F>(signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = AppConfig::load_or_env()?;

    // One pool for the whole process, shared by every request.
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.init_schema {
        models::schema::ensure_schema(&db).await?;
        info!("schema ensured");
    }

    let app = routes::build_router(ServerState::with_db(db), build_cors());

    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "biztime listening");
    axum::serve(listener, app).with_graceful_shutdown(signal).await?;
    info!("server stopped");
    Ok(())
}
