//! Applying the coefficient to value series

use crate::source::CoefficientSource;
use pacos_errors::Error;
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::debug;

/// Scales value series by the current coefficient
#[derive(Clone)]
pub struct CalibrationService {
    source: Arc<dyn CoefficientSource>,
}

impl CalibrationService {
    #[must_use]
    pub fn new<S: CoefficientSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Build a service sharing an existing source
    #[must_use]
    pub fn with_source(source: Arc<dyn CoefficientSource>) -> Self {
        Self { source }
    }

    /// Multiply every value by the coefficient, preserving order and length
    ///
    /// # Errors
    ///
    /// Returns the source's error if the coefficient cannot be read.
    pub async fn apply(&self, values: &[f64]) -> Result<Vec<f64>, Error> {
        let coefficient = self.source.coefficient().await?;
        debug!(values = values.len(), coefficient, "applying calibration");
        Ok(values.iter().map(|value| value * coefficient).collect())
    }

    /// Lazily multiply `values` by the coefficient read at this call
    ///
    /// The coefficient is read when `stream` is called, not on the first
    /// `next()`. The returned iterator holds no storage handle; later
    /// coefficient changes do not affect it. Call `stream` again to pick them
    /// up.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the coefficient cannot be read.
    pub async fn stream<I>(&self, values: I) -> Result<Calibrated<I::IntoIter>, Error>
    where
        I: IntoIterator<Item = f64>,
    {
        let coefficient = self.source.coefficient().await?;
        Ok(Calibrated {
            inner: values.into_iter(),
            coefficient,
        })
    }
}

impl std::fmt::Debug for CalibrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalibrationService").finish_non_exhaustive()
    }
}

/// Iterator returned by [`CalibrationService::stream`]
#[derive(Debug, Clone)]
pub struct Calibrated<I> {
    inner: I,
    coefficient: f64,
}

impl<I> Calibrated<I> {
    /// Coefficient fixed for this iteration
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl<I: Iterator<Item = f64>> Iterator for Calibrated<I> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next().map(|value| value * self.coefficient)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = f64>> ExactSizeIterator for Calibrated<I> {}

impl<I: DoubleEndedIterator<Item = f64>> DoubleEndedIterator for Calibrated<I> {
    fn next_back(&mut self) -> Option<f64> {
        self.inner.next_back().map(|value| value * self.coefficient)
    }
}

impl<I: FusedIterator<Item = f64>> FusedIterator for Calibrated<I> {}
