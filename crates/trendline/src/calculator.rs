//! Calibrated trendline calculation

use crate::fit::{fit, Point};
use crate::source::CoefficientSource;
use pacos_errors::{CalibrationError, Error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Result of a calibrated least-squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
}

/// Computes trendlines scaled by the current coefficient
#[derive(Clone)]
pub struct TrendlineCalculator {
    source: Arc<dyn CoefficientSource>,
}

impl TrendlineCalculator {
    #[must_use]
    pub fn new<S: CoefficientSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Build a calculator sharing an existing source
    #[must_use]
    pub fn with_source(source: Arc<dyn CoefficientSource>) -> Self {
        Self { source }
    }

    /// Fit `points` and scale the slope by the coefficient
    ///
    /// The coefficient is read once, after the input has been validated and
    /// before any arithmetic, so a concurrent change never splits a result.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::EmptySeries` for an empty series, or the
    /// source's error if the coefficient cannot be read.
    pub async fn calculate(&self, points: &[Point]) -> Result<Trendline, Error> {
        if points.is_empty() {
            return Err(CalibrationError::EmptySeries.into());
        }

        let coefficient = self.source.coefficient().await?;
        let line = fit(points)?.scaled(coefficient);

        debug!(
            points = points.len(),
            coefficient,
            slope = line.slope,
            intercept = line.intercept,
            "trendline calculated"
        );
        Ok(line)
    }
}

impl std::fmt::Debug for TrendlineCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendlineCalculator").finish_non_exhaustive()
    }
}
