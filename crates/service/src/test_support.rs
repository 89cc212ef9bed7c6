#![cfg(test)]
use configs::DatabaseConfig;
use models::db::{connect_with_config, migrate};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var_os("SKIP_DB_TESTS").is_some() {
        return None;
    }
    let cfg = DatabaseConfig { min_connections: 1, ..DatabaseConfig::from_env() };
    (!cfg.url.trim().is_empty()).then_some(cfg)
}

/// Fresh connection for the current test's runtime, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_config() else { return Ok(None) };

    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migrate(&db).await?;
            Ok::<_, anyhow::Error>(())
        })
        .await?;

    Ok(Some(connect_with_config(&cfg).await?))
}
