//! Runtime SQL queries for calibration settings
//!
//! Each function runs inside a caller-owned transaction so the store decides
//! where the commit boundary is.

use crate::models::CoefficientRecord;
use pacos_errors::Error;
use sqlx::{query, query_as, Sqlite, Transaction};

/// Fetch a setting by key
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if the statement fails.
pub async fn get_setting(
    tx: &mut Transaction<'_, Sqlite>,
    key: &str,
) -> Result<Option<CoefficientRecord>, Error> {
    let record = query_as::<_, CoefficientRecord>(
        "SELECT key, value, updated_at FROM calibration_settings WHERE key = ?1",
    )
    .bind(key)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(record)
}

/// Insert a setting unless one already exists
///
/// Returns `true` when this call created the row.
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if the statement fails.
pub async fn insert_setting_if_absent(
    tx: &mut Transaction<'_, Sqlite>,
    key: &str,
    value: f64,
) -> Result<bool, Error> {
    let now = chrono::Utc::now().timestamp();

    let result = query(
        "INSERT OR IGNORE INTO calibration_settings (key, value, updated_at)
         VALUES (?1, ?2, ?3)",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Insert or replace a setting and refresh its timestamp
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if the statement fails.
pub async fn upsert_setting(
    tx: &mut Transaction<'_, Sqlite>,
    key: &str,
    value: f64,
) -> Result<(), Error> {
    let now = chrono::Utc::now().timestamp();

    query(
        "INSERT INTO calibration_settings (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Delete a setting
///
/// Returns `true` when a row was removed.
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if the statement fails.
pub async fn delete_setting(tx: &mut Transaction<'_, Sqlite>, key: &str) -> Result<bool, Error> {
    let result = query("DELETE FROM calibration_settings WHERE key = ?1")
        .bind(key)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected() > 0)
}
