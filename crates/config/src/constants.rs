//! Names and fallbacks shared by the configuration layer
//!
//! The environment variable names are part of the external interface and
//! must stay stable across releases.

/// Environment override for the out-of-the-box trendline coefficient
pub const DEFAULT_COEFFICIENT_ENV: &str = "PACOS_TRENDLINE_DEFAULT";

/// Environment override for the coefficient database location
pub const DB_PATH_ENV: &str = "PACOS_DB_PATH";

/// Coefficient used when no override is configured or it cannot be parsed
pub const FALLBACK_COEFFICIENT: f64 = 1.0;

/// Database location used when neither the file nor the environment sets one
pub const DEFAULT_DB_PATH: &str = "data/pacos.sqlite3";
