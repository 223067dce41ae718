//! pacos - Trendline calibration coefficient manager
//!
//! Thin CLI over the coefficient store, the calibration service and the
//! trendline calculator.

mod cli;
mod display;
mod error;
mod input;
mod setup;

use crate::cli::{Cli, Commands};
use crate::display::{OperationResult, OutputRenderer};
use crate::error::CliError;
use crate::setup::SystemSetup;
use clap::Parser;
use pacos_config::parse_coefficient;
use pacos_errors::CalibrationError;
use pacos_trendline::{CalibrationService, Point, TrendlineCalculator};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if json_mode {
            let payload = serde_json::json!({
                "error": e.to_string(),
                "code": e.code(),
            });
            eprintln!("{payload}");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Validated command input; built before any storage is opened
enum Request {
    Show,
    Set(f64),
    Simulate(Vec<f64>),
    Reset,
    Trend(Vec<Point>),
}

impl Request {
    fn from_command(command: Commands) -> Result<Self, CliError> {
        match command {
            Commands::Show => Ok(Self::Show),
            Commands::Set { coefficient } => parse_coefficient(&coefficient)
                .map(Self::Set)
                .ok_or_else(|| CalibrationError::invalid_coefficient(coefficient).into()),
            Commands::Simulate { values } => Ok(Self::Simulate(input::parse_values(&values)?)),
            Commands::Reset => Ok(Self::Reset),
            Commands::Trend { points } => Ok(Self::Trend(input::parse_points(&points)?)),
        }
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting pacos v{}", env!("CARGO_PKG_VERSION"));

    let request = Request::from_command(cli.command)?;
    let setup = SystemSetup::initialize(&cli.global).await?;
    let renderer = OutputRenderer::new(cli.global.json);

    let result = execute(request, &setup).await?;
    renderer.render_result(&result)?;

    info!("Command completed successfully");
    Ok(())
}

/// Execute the validated request
async fn execute(request: Request, setup: &SystemSetup) -> Result<OperationResult, CliError> {
    let store = setup.store();
    match request {
        Request::Show => Ok(OperationResult::Coefficient(store.get_record().await?)),
        Request::Set(coefficient) => {
            store.set(coefficient).await?;
            Ok(OperationResult::Updated { coefficient })
        }
        Request::Simulate(values) => {
            let service = CalibrationService::new(store.clone());
            let calibrated = service.stream(values).await?;
            let coefficient = calibrated.coefficient();
            Ok(OperationResult::Simulated {
                coefficient,
                values: calibrated.collect(),
            })
        }
        Request::Reset => {
            store.reset().await?;
            Ok(OperationResult::Reset)
        }
        Request::Trend(points) => {
            let calculator = TrendlineCalculator::new(store.clone());
            let line = calculator.calculate(&points).await?;
            Ok(OperationResult::Trend(line))
        }
    }
}

/// Initialize tracing/logging
///
/// Logs always go to stderr so stdout carries only command output.
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if debug_enabled {
        // Debug mode: structured JSON logs
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "info,pacos=debug,pacos_state=debug,pacos_trendline=debug,pacos_config=debug",
                    )
                }),
            )
            .init();
    } else if json_mode {
        // JSON mode: keep stderr free for the error payload
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("warn,pacos=warn,pacos_state=warn")
                }),
            )
            .init();
    }
}
