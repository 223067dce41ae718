#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Persistent calibration state for pacos
//!
//! This crate owns the `SQLite` database holding the trendline coefficient
//! and the store that seeds, reads, replaces and resets it.

pub mod models;
pub mod queries;
pub mod store;

pub use models::CoefficientRecord;
pub use store::{CoefficientStore, TRENDLINE_KEY};

use pacos_errors::{Error, StorageError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::Duration;

/// Create a new `SQLite` connection pool
///
/// The parent directory of `db_path` is created when it does not exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened.
pub async fn create_pool(db_path: &Path) -> Result<Pool<Sqlite>, Error> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::DirectoryCreateFailed {
                path: parent.display().to_string(),
                message: e.to_string(),
            }
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Unavailable {
            message: format!("{}: {e}", db_path.display()),
        })?;

    Ok(pool)
}

/// Run database migrations
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
