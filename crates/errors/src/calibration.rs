//! Calibration domain error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalibrationError {
    #[error("invalid coefficient: {value:?} is not a finite number")]
    InvalidCoefficient { value: String },

    #[error("trendline requires at least one point")]
    EmptySeries,
}

impl CalibrationError {
    /// Build an `InvalidCoefficient` error from any displayable input
    #[must_use]
    pub fn invalid_coefficient(value: impl ToString) -> Self {
        Self::InvalidCoefficient {
            value: value.to_string(),
        }
    }
}

impl UserFacingError for CalibrationError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCoefficient { .. } => {
                Some("Pass a finite decimal number such as 1.0 or 2.5.")
            }
            Self::EmptySeries => Some("Provide at least one x:y point."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidCoefficient { .. } => "calibration.invalid_coefficient",
            Self::EmptySeries => "calibration.empty_series",
        };
        Some(code)
    }
}
