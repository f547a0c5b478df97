//! Environment/runtime helpers
//!
//! Sanity checks on the filesystem layout expected at startup.

use tracing::warn;

/// Check that the static asset root exists; warn when it does not.
///
/// Returns `true` if the directory is present. A missing root is not fatal,
/// the file service will simply answer 404.
pub async fn ensure_static_root(root: &str) -> bool {
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%root, "static root is not a directory; static assets will 404");
            false
        }
        Err(_) => {
            warn!(%root, "static root not found; static assets will 404");
            false
        }
    }
}

/// Create `dir` (and parents) if missing. Used for SQLite database files.
pub async fn ensure_dir(dir: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))
}
