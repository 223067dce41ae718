#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Trendline calculation and value calibration for pacos
//!
//! Both entry points read the current coefficient through a
//! [`CoefficientSource`] exactly once per call and never memoise it.

pub mod calculator;
pub mod fit;
pub mod service;
pub mod source;

pub use calculator::{Trendline, TrendlineCalculator};
pub use fit::{fit, LeastSquaresFit, Point};
pub use service::{Calibrated, CalibrationService};
pub use source::{CoefficientSource, FixedCoefficient};
