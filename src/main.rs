//! Calculator service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calculator_service::api::{create_router, AppState};
use calculator_service::config::Config;
use calculator_service::metrics;
use calculator_service::utils::shutdown_signal;

/// Stateless arithmetic HTTP service.
#[derive(Parser, Debug)]
#[command(name = "calculator-service")]
#[command(about = "JSON arithmetic service with add, subtract, multiply and divide endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    /// HTTP listening port.
    #[arg(short, long, global = true, env = "PORT")]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("calculator_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if args.json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(args.port),
        Some(Command::Serve) | None => cmd_serve(args.port).await,
    }
}

/// Load configuration, apply the CLI port override and validate.
fn load_config(port_override: Option<u16>) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config(port_override: Option<u16>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CALCULATOR SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(port_override) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(e);
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind address: {}", config.bind_addr()?);
    println!("  Log level: {}", config.rust_log);
    println!("  Verbose: {}", config.verbose);
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config(port_override)?;

    let handle = metrics::install_recorder()?;
    let app_state = AppState::new(handle);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Calculator service listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Calculator service stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn port_flag_and_subcommand_parse() {
        let args = Args::try_parse_from(["calculator-service", "check-config", "--port", "4000"]).unwrap();
        assert_eq!(args.port, Some(4000));
        assert!(matches!(args.command, Some(Command::CheckConfig)));
    }

    #[test]
    fn port_falls_back_to_env() {
        std::env::set_var("PORT", "4100");
        let args = Args::try_parse_from(["calculator-service"]).unwrap();
        std::env::remove_var("PORT");

        assert_eq!(args.port, Some(4100));
        assert!(args.command.is_none());
    }
}
