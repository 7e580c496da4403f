//! Calculator Service (CalcSrv)
//!
//! HTTP front end for Calculadora Avanzada: calculations, history,
//! memory register, and text chart rendering.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use calcsrv::api::routes::create_router;
use calcsrv::{AppState, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "CalcSrv - Calculadora Avanzada service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate the configuration and print the effective values
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .init();

    match args.command {
        Some(Commands::Check) => check_config(&config),
        None => run_service(config).await,
    }
}

async fn run_service(config: Config) -> Result<()> {
    info!("Starting Calculator Service...");

    let bind_address = config.bind_address();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Calculator Service started on {}", bind_address);
    info!("API endpoints:");
    info!("  GET /health - Health check");
    info!("  GET /api/operaciones - Supported operations");
    info!("  POST /api/calcular - Run a calculation");
    info!("  GET/DELETE /api/historial - Operation history");
    info!("  POST /api/memoria - Memory register");
    info!("  POST /api/graficas/* - Text chart rendering");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Print the effective configuration
fn check_config(config: &Config) -> Result<()> {
    println!("=== CalcSrv configuration check ===\n");

    println!("Service name: {}", config.service.name);
    println!("Bind address: {}", config.bind_address());
    println!("Log level: {}", config.log.level);

    println!("\n✓ Configuration valid");
    Ok(())
}
