//! reform-cost - labor cost simulator for 24/7 plants under the 2025-2027 reform.
//!
//! Usage:
//!   reform-cost serve --bind 127.0.0.1:3000             # HTTP API server
//!   reform-cost simulate --wage 5000 --start 2025-07-01  # Monthly table
//!   reform-cost simulate --json                          # JSON output

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reform_cost_engine::api::{AppState, create_router};
use reform_cost_engine::calculation::run_simulation;
use reform_cost_engine::config::ConfigLoader;
use reform_cost_engine::models::{OperatingParameters, SimulationResult, ValidationMode};

#[derive(Parser, Debug)]
#[command(
    name = "reform-cost",
    version,
    about = "Estimate the monthly labor cost of a 24/7 plant under the 2025-2027 labor reform"
)]
struct Cli {
    /// Directory holding reform.yaml, surcharges.yaml and timeline.yaml
    /// (defaults to the built-in reform timeline)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Run one simulation and print the monthly cost table
    Simulate {
        /// Pay for one ordinary hour
        #[arg(long, default_value = "5000")]
        wage: Decimal,
        /// Employees working each shift
        #[arg(long, default_value_t = 6)]
        employees_per_shift: u32,
        /// Shifts per day
        #[arg(long, default_value_t = 3)]
        shifts_per_day: u32,
        /// First simulated day (YYYY-MM-DD)
        #[arg(long, default_value = "2025-07-01")]
        start: NaiveDate,
        /// Last simulated day (YYYY-MM-DD)
        #[arg(long, default_value = "2027-12-31")]
        end: NaiveDate,
        /// Skip the wage and headcount checks
        #[arg(long)]
        permissive: bool,
        /// Output the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to initialise tracing: {err}");
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ConfigLoader::builtin()),
    }
}

fn print_table(result: &SimulationResult) {
    println!("{:<8}  {:>20}", "month", "monthly cost");
    for (month, cost) in result.chart_series() {
        println!("{:<8}  {:>20}", month, cost.round_dp(2));
    }
    println!("{:<8}  {:>20}", "total", result.totals.total_cost.round_dp(2));
}

fn simulate(
    loader: &ConfigLoader,
    params: &OperatingParameters,
) -> anyhow::Result<SimulationResult> {
    run_simulation(params, loader.config(), false).with_context(|| {
        format!(
            "simulation from {} to {} rejected",
            params.start_date, params.end_date
        )
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let loader = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Serve { bind } => {
            let app = create_router(AppState::new(loader));
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .context("failed to bind TCP listener")?;
            let actual_addr = listener
                .local_addr()
                .context("failed to read socket address")?;
            info!(%actual_addr, "starting reform-cost API");

            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("server terminated with error")?;
        }
        Command::Simulate {
            wage,
            employees_per_shift,
            shifts_per_day,
            start,
            end,
            permissive,
            json,
        } => {
            let params = OperatingParameters {
                hourly_wage: wage,
                employees_per_shift,
                shifts_per_day,
                start_date: start,
                end_date: end,
                validation: if permissive {
                    ValidationMode::Permissive
                } else {
                    ValidationMode::Strict
                },
            };

            let result = simulate(&loader, &params)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_table(&result);
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reform_cost_engine::error::EngineError;

    #[test]
    fn test_simulate_keeps_engine_error_as_cause() {
        let params = OperatingParameters {
            start_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            ..OperatingParameters::default()
        };

        let err = simulate(&ConfigLoader::builtin(), &params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "simulation from 2027-01-01 to 2026-01-01 rejected"
        );
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_simulate_default_plant() {
        let result = simulate(&ConfigLoader::builtin(), &OperatingParameters::default()).unwrap();
        assert_eq!(result.totals.month_count, 30);
        assert!(result.days.is_none());
    }
}
