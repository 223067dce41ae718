//! Database models for calibration state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `calibration_settings`
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CoefficientRecord {
    pub key: String,
    pub value: f64,
    /// Unix timestamp (seconds) of the last write
    pub updated_at: i64,
}

impl CoefficientRecord {
    /// Last write time, if the stored timestamp is representable
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.updated_at, 0)
    }
}
