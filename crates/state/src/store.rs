//! Coefficient store implementation

use crate::{models::CoefficientRecord, queries};
use pacos_config::{parse_coefficient, DefaultResolver};
use pacos_errors::{CalibrationError, Error, StorageError};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::{debug, info};

/// Key of the trendline coefficient row
pub const TRENDLINE_KEY: &str = "trendline_multiplier";

/// Durable home of the trendline coefficient
///
/// Every operation acquires a pooled connection, runs a single transaction
/// and commits. Nothing is cached between calls, so a write is visible to the
/// very next read from any clone or process.
#[derive(Debug, Clone)]
pub struct CoefficientStore {
    pool: Pool<Sqlite>,
    resolver: DefaultResolver,
}

impl CoefficientStore {
    /// Open the database at `db_path`, creating it and running migrations
    ///
    /// # Errors
    ///
    /// Returns an error if database setup or migrations fail.
    pub async fn open(db_path: &Path, resolver: DefaultResolver) -> Result<Self, Error> {
        let pool = crate::create_pool(db_path).await?;
        crate::run_migrations(&pool).await?;
        debug!(db_path = %db_path.display(), "coefficient store opened");
        Ok(Self { pool, resolver })
    }

    /// Get the active coefficient, seeding the default if none is stored
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the database cannot be read or
    /// written.
    pub async fn get(&self) -> Result<f64, Error> {
        self.get_record().await.map(|record| record.value)
    }

    /// Get the full active row, seeding the default if none is stored
    ///
    /// Seeding uses insert-or-ignore followed by a re-read in the same
    /// transaction, so concurrent first readers all return the row that won.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the database cannot be read or
    /// written, and `StorageError::CorruptedData` if the stored value is not
    /// finite.
    pub async fn get_record(&self) -> Result<CoefficientRecord, Error> {
        let mut tx = self.pool.begin().await?;
        let existing = queries::get_setting(&mut tx, TRENDLINE_KEY).await?;
        tx.commit().await?;

        if let Some(record) = existing {
            return checked(record);
        }

        let default = self.resolver.resolve();
        let mut tx = self.pool.begin().await?;
        let inserted = queries::insert_setting_if_absent(&mut tx, TRENDLINE_KEY, default).await?;
        let record = queries::get_setting(&mut tx, TRENDLINE_KEY)
            .await?
            .ok_or_else(|| StorageError::CorruptedData {
                message: format!("{TRENDLINE_KEY} missing right after seeding"),
            })?;
        tx.commit().await?;

        if inserted {
            debug!(value = record.value, "seeded default trendline coefficient");
        }
        checked(record)
    }

    /// Replace the active coefficient
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::InvalidCoefficient` for NaN or infinite
    /// values, before the database is touched. Returns
    /// `StorageError::Unavailable` if the write fails.
    pub async fn set(&self, value: f64) -> Result<(), Error> {
        if !value.is_finite() {
            return Err(CalibrationError::invalid_coefficient(value).into());
        }

        let mut tx = self.pool.begin().await?;
        queries::upsert_setting(&mut tx, TRENDLINE_KEY, value).await?;
        tx.commit().await?;

        info!(value, "trendline coefficient updated");
        Ok(())
    }

    /// Parse textual input and replace the active coefficient
    ///
    /// Returns the parsed value.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::InvalidCoefficient` if `raw` is not a finite
    /// number, leaving the stored value unchanged.
    pub async fn set_from_str(&self, raw: &str) -> Result<f64, Error> {
        let value =
            parse_coefficient(raw).ok_or_else(|| CalibrationError::invalid_coefficient(raw))?;
        self.set(value).await?;
        Ok(value)
    }

    /// Remove the stored coefficient so the next read re-seeds it
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the delete fails.
    pub async fn reset(&self) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;
        let removed = queries::delete_setting(&mut tx, TRENDLINE_KEY).await?;
        tx.commit().await?;

        if removed {
            info!("trendline coefficient reset to default");
        } else {
            debug!("reset requested with no stored trendline coefficient");
        }
        Ok(())
    }

    /// Full stored row, without seeding
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the database cannot be read.
    pub async fn record(&self) -> Result<Option<CoefficientRecord>, Error> {
        let mut tx = self.pool.begin().await?;
        let record = queries::get_setting(&mut tx, TRENDLINE_KEY).await?;
        tx.commit().await?;
        Ok(record)
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn checked(record: CoefficientRecord) -> Result<CoefficientRecord, Error> {
    if record.value.is_finite() {
        Ok(record)
    } else {
        Err(StorageError::CorruptedData {
            message: format!("{} holds non-finite value {}", record.key, record.value),
        }
        .into())
    }
}
