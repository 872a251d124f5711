//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the directory holding a file-backed SQLite database exists.
///
/// Non-SQLite URLs and in-memory databases are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    if let Some(parent) = Path::new(path).parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        if tokio::fs::metadata(parent).await.is_err() {
            warn!(dir = %parent.display(), "sqlite directory missing; creating it");
        }
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        debug!(dir = %parent.display(), "sqlite directory ready");
    }
    Ok(())
}

/// Extract the file path from a `sqlite:` URL, if it points at a file.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path.strip_prefix("file:").unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_paths_are_extracted() {
        assert_eq!(sqlite_file_path("sqlite://data/pw.db?mode=rwc"), Some("data/pw.db"));
        assert_eq!(sqlite_file_path("sqlite:pw.db"), Some("pw.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/pw"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("pocketwork-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/db.sqlite?mode=rwc", dir.display());
        ensure_sqlite_dir(&url).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
