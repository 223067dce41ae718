//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pacos - Trendline calibration coefficient manager
#[derive(Parser)]
#[command(name = "pacos")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Trendline calibration coefficient manager")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Coefficient database location (overrides config and PACOS_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Display the active coefficient
    Show,

    /// Persist a new coefficient
    Set {
        /// New coefficient value
        #[arg(allow_hyphen_values = true)]
        coefficient: String,
    },

    /// Apply the coefficient to a comma separated series
    Simulate {
        /// Comma separated list of numeric values to calibrate
        #[arg(allow_hyphen_values = true)]
        values: String,
    },

    /// Remove the stored coefficient so the default is seeded again
    Reset,

    /// Fit a calibrated trendline through comma separated x:y points
    Trend {
        /// Points such as "0:0,1:1,2:2.5"
        #[arg(allow_hyphen_values = true)]
        points: String,
    },
}
