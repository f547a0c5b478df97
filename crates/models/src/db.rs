use std::sync::Arc;
use std::time::Duration;

use configs::{DatabaseConfig, Driver};
use migration::MigratorTrait;
use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};
use tracing::{debug, warn};

/// Open a connection (pool) from configuration.
///
/// Per-request connectors cap the pool at a single connection.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    if is_in_memory(cfg) {
        return connect_in_memory(cfg).await;
    }
    let mut opts = ConnectOptions::new(cfg.connection_url());
    let max = if cfg.pooled { cfg.max_connections } else { 1 };
    opts.max_connections(max)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    Database::connect(opts).await
}

/// In-memory SQLite lives exactly as long as its connection, so the pool holds
/// one connection that is never reaped for idleness or age.
async fn connect_in_memory(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .acquire_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .connect(&cfg.connection_url())
        .await
        .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Apply pending migrations (creates the `taller` table when missing).
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await
}

/// How handlers obtain a storage connection.
#[derive(Clone)]
pub enum Connector {
    /// Open a fresh connection for every operation and close it afterwards.
    PerRequest(Arc<DatabaseConfig>),
    /// Hand out clones of one shared pool.
    Pooled(DatabaseConnection),
}

impl Connector {
    pub async fn from_config(cfg: &DatabaseConfig) -> Result<Self, DbErr> {
        if cfg.pooled || is_in_memory(cfg) {
            if !cfg.pooled {
                warn!("in-memory sqlite cannot be reopened per request; using a shared connection");
            }
            return Ok(Connector::Pooled(connect_with_config(cfg).await?));
        }
        Ok(Connector::PerRequest(Arc::new(cfg.clone())))
    }

    pub async fn acquire(&self) -> Result<Lease, DbErr> {
        match self {
            Connector::PerRequest(cfg) => {
                let conn = connect_with_config(cfg).await?;
                debug!(driver = %cfg.effective_driver(), "opened per-request connection");
                Ok(Lease { conn, close_on_release: true })
            }
            Connector::Pooled(db) => Ok(Lease { conn: db.clone(), close_on_release: false }),
        }
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, Connector::Pooled(_))
    }
}

fn is_in_memory(cfg: &DatabaseConfig) -> bool {
    let url = cfg.connection_url();
    cfg.effective_driver() == Driver::Sqlite && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// A connection checked out for a single operation.
pub struct Lease {
    conn: DatabaseConnection,
    close_on_release: bool,
}

impl Lease {
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the connection if it was opened for this operation only.
    pub async fn release(self) {
        if self.close_on_release {
            if let Err(e) = self.conn.close().await {
                warn!(error = %e, "closing per-request connection failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servicio::{self, ServicioInput};
    use sea_orm::{ActiveModelTrait, EntityTrait};

    fn sqlite_config(dir: &tempfile::TempDir) -> DatabaseConfig {
        DatabaseConfig {
            driver: Driver::Sqlite,
            name: dir.path().join("taller.db").to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn per_request_connections_share_the_same_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = sqlite_config(&dir);
        let connector = Connector::from_config(&cfg).await?;
        assert!(!connector.is_pooled());

        let lease = connector.acquire().await?;
        migrate(lease.conn()).await?;
        let created = ServicioInput { nombre: "Ana".into(), ..Default::default() }
            .into_active_model()
            .insert(lease.conn())
            .await?;
        lease.release().await;

        let lease = connector.acquire().await?;
        let found = servicio::Entity::find_by_id(created.id).one(lease.conn()).await?;
        lease.release().await;
        assert_eq!(found.map(|m| m.nombre), Some("Ana".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_sqlite_is_forced_to_shared() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let connector = Connector::from_config(&cfg).await?;
        assert!(connector.is_pooled());
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_connection_is_never_recycled() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), pooled: true, ..Default::default() };
        let connector = Connector::from_config(&cfg).await?;

        let lease = connector.acquire().await?;
        let pool = lease.conn().get_sqlite_connection_pool().options();
        assert_eq!(pool.get_max_connections(), 1);
        assert_eq!(pool.get_idle_timeout(), None);
        assert_eq!(pool.get_max_lifetime(), None);
        migrate(lease.conn()).await?;
        ServicioInput { nombre: "Ana".into(), ..Default::default() }
            .into_active_model()
            .insert(lease.conn())
            .await?;
        lease.release().await;

        for _ in 0..3 {
            let lease = connector.acquire().await?;
            let rows = servicio::Entity::find().all(lease.conn()).await?;
            lease.release().await;
            assert_eq!(rows.len(), 1);
        }
        Ok(())
    }

    #[tokio::test]
    async fn migrate_is_idempotent() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let db = connect_with_config(&sqlite_config(&dir)).await?;
        migrate(&db).await?;
        migrate(&db).await?;
        assert!(servicio::Entity::find().all(&db).await?.is_empty());
        Ok(())
    }
}
