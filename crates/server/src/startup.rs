use std::{future::Future, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, Driver};
use models::db::{self, Connector};
use service::servicio::SeaOrmServicioRepository;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::mock::build_mock_router;
use crate::routes;
use crate::servicios::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve once Ctrl+C is received
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot install Ctrl+C handler; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Make sure the parent directory of a SQLite database file exists.
async fn prepare_sqlite_dir(cfg: &DatabaseConfig) -> anyhow::Result<()> {
    if !cfg.url.trim().is_empty() || cfg.driver != Driver::Sqlite || cfg.name == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(&cfg.name).parent().and_then(|p| p.to_str()) {
        if !parent.is_empty() {
            common::env::ensure_dir(parent).await?;
        }
    }
    Ok(())
}

/// Build the handler state: optional schema migration, then the connector.
pub async fn build_state(cfg: &DatabaseConfig) -> Result<AppState, StartupError> {
    prepare_sqlite_dir(cfg).await?;
    let connector = Connector::from_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.auto_migrate {
        let lease = connector
            .acquire()
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        let migrated = db::migrate(lease.conn()).await;
        lease.release().await;
        migrated.map_err(|e| StartupError::Database(e.to_string()))?;
        info!(driver = %cfg.effective_driver(), "schema ready");
    }

    Ok(AppState { servicios: Arc::new(SeaOrmServicioRepository::new(connector)) })
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn serve<F>(addr: &str, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind address `{addr}`: {e}")))?;
    let local: SocketAddr = listener.local_addr()?;
    info!(%addr, %local, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the record API and serve it until `shutdown` resolves
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);
    let addr = cfg.server.bind_addr();
    info!(%addr, url = %format!("http://{addr}/servicio"), "starting servicio API");
    serve(&addr, app, shutdown).await
}

pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_with_shutdown(cfg, shutdown_signal()).await
}

/// Serve the static root and `/users` until Ctrl+C
pub async fn run_mock(cfg: AppConfig) -> anyhow::Result<()> {
    let mock = cfg.mock;
    common::env::ensure_static_root(&mock.root).await;
    let app = build_mock_router(&mock.root, build_cors());
    let addr = mock.bind_addr();
    info!(%addr, root = %mock.root, "starting mock service");
    serve(&addr, app, shutdown_signal()).await
}
