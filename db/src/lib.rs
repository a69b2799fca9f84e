pub mod models;
pub mod readiness;
pub mod store;
pub mod test_utils;

#[cfg(test)]
mod tests;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

use crate::readiness::{RetryConfig, with_retry};

/// Turns a configured database path into a connection URL.
///
/// DSNs are used as-is; anything else is treated as a SQLite file path.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}") // yields sqlite:///abs/path for absolute paths
    }
}

/// Connects to the database named by `DATABASE_PATH`, retrying while it is unavailable.
pub async fn connect(retry: &RetryConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_retry(&config::database_path(), retry).await
}

/// [`connect_to`] with backoff, for databases that come up after the seeder starts.
pub async fn connect_with_retry(
    path_or_url: &str,
    retry: &RetryConfig,
) -> Result<DatabaseConnection, DbErr> {
    with_retry(retry, "database connect", move || connect_to(path_or_url)).await
}

pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = database_url(path_or_url);
    if url != path_or_url {
        // Bare file path. SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    log::debug!("connecting to {url}");
    Database::connect(&url).await
}
