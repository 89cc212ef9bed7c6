use std::{net::SocketAddr, sync::Arc};

use configs::{AppConfig, StorageBackend};
use service::{memory::InMemoryStore, AppServices};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// Connect the configured storage backend and wire the services to it.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let services = match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.storage.run_migrations {
                models::db::migrate(&db).await?;
            }
            AppServices::seaorm(db)
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage; data is lost on restart");
            AppServices::in_memory(Arc::new(InMemoryStore::seeded()))
        }
    };
    Ok(ServerState::new(services))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = routes::build_router(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting nz walks api");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 5080;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 5080);
    }

    #[tokio::test]
    async fn memory_backend_needs_no_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await.unwrap();
        assert_eq!(state.services.difficulties.list().await.unwrap().len(), 3);
    }
}
