//! Ordinary least-squares fit over a point series

use crate::calculator::Trendline;
use pacos_errors::{CalibrationError, Error};
use serde::{Deserialize, Serialize};

/// A single (x, y) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Unscaled least-squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeastSquaresFit {
    /// Slope before the calibration coefficient is applied
    pub raw_slope: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    /// `true` when the series has one point or zero x-variance; the slope
    /// is then defined as 0 regardless of the coefficient
    pub degenerate: bool,
}

impl LeastSquaresFit {
    /// Apply `coefficient` to the slope and derive the intercept from the
    /// scaled slope
    #[must_use]
    pub fn scaled(&self, coefficient: f64) -> Trendline {
        let slope = if self.degenerate {
            0.0
        } else {
            self.raw_slope * coefficient
        };
        Trendline {
            slope,
            intercept: self.mean_y - slope * self.mean_x,
        }
    }
}

/// Fit a line through `points`
///
/// Sums are accumulated in input order, so identical input always yields a
/// bit-identical fit.
///
/// # Errors
///
/// Returns `CalibrationError::EmptySeries` if `points` is empty.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn fit(points: &[Point]) -> Result<LeastSquaresFit, Error> {
    let Some(first) = points.first() else {
        return Err(CalibrationError::EmptySeries.into());
    };

    let n = points.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_xx += p.x * p.x;
    }
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    // Rounding can leave a tiny non-zero denominator for equal x values
    let constant_x = points.iter().all(|p| p.x == first.x);
    let denominator = n * sum_xx - sum_x * sum_x;

    if points.len() == 1 || constant_x || denominator == 0.0 {
        return Ok(LeastSquaresFit {
            raw_slope: 0.0,
            mean_x,
            mean_y,
            degenerate: true,
        });
    }

    Ok(LeastSquaresFit {
        raw_slope: (n * sum_xy - sum_x * sum_y) / denominator,
        mean_x,
        mean_y,
        degenerate: false,
    })
}
