#![cfg(test)]
use configs::{DatabaseConfig, Driver};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

pub fn sqlite_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        driver: Driver::Sqlite,
        name: dir.path().join("taller.db").to_string_lossy().into_owned(),
        ..Default::default()
    }
}

/// Fresh migrated SQLite database in a temp dir. Keep the `TempDir` alive for the test.
pub async fn get_db() -> Result<(TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let db = models::db::connect_with_config(&sqlite_config(&dir)).await?;
    models::db::migrate(&db).await?;
    Ok((dir, db))
}
