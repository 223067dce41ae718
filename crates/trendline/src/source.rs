//! Where the calibration coefficient comes from

use async_trait::async_trait;
use pacos_errors::Error;
use pacos_state::CoefficientStore;

/// Supplies the current calibration coefficient
#[async_trait]
pub trait CoefficientSource: Send + Sync {
    /// Read the coefficient as it is right now
    async fn coefficient(&self) -> Result<f64, Error>;
}

#[async_trait]
impl CoefficientSource for CoefficientStore {
    async fn coefficient(&self) -> Result<f64, Error> {
        self.get().await
    }
}

/// A constant coefficient, for callers without persistent state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoefficient(pub f64);

#[async_trait]
impl CoefficientSource for FixedCoefficient {
    async fn coefficient(&self) -> Result<f64, Error> {
        Ok(self.0)
    }
}
