mod config;
mod error;
mod http;
mod metrics;
mod snapshot;
mod state;
mod static_ui;
mod timers;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{DashboardConfig, TimerArgs};
use http::router;
use sreeraksha_core::registry::Registry;
use state::AppState;
use timers::TimerSet;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sreeraksha")]
#[command(about = "SreeRaksha mocked monitoring dashboard: feed grid, distress panel, camera map and alert analytics")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// HTTP server address
        #[arg(long, default_value = "127.0.0.1:8080")]
        http: String,
        #[command(flatten)]
        timers: TimerArgs,
    },
    /// Run the dashboard in the terminal
    Tui {
        /// Also serve HTTP on this address
        #[arg(long)]
        http: Option<String>,
        #[command(flatten)]
        timers: TimerArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it stays quiet unless RUST_LOG asks otherwise
    let default_level = match cli.command {
        Commands::Tui { .. } => "off",
        Commands::Serve { .. } => "info",
    };
    init_tracing(cli.log_json, default_level);

    match cli.command {
        Commands::Serve { http, timers } => {
            let config = DashboardConfig::from_args(Some(http), &timers)?;
            run_server(config).await?;
        }
        Commands::Tui { http, timers } => {
            let config = DashboardConfig::from_args(http, &timers)?;
            run_terminal(config).await?;
        }
    }

    Ok(())
}

fn init_tracing(json: bool, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_state() -> anyhow::Result<AppState> {
    let handle = crate::metrics::init_metrics().context("Failed to install Prometheus metrics exporter")?;
    let registry = Registry::seed().context("Built-in camera data failed validation")?;
    let state = AppState::new(registry).with_prometheus(handle);
    Ok(state)
}

fn spawn_http(state: AppState, http_addr: String) -> JoinHandle<anyhow::Result<()>> {
    tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(&http_addr)
            .await
            .with_context(|| format!("Failed to bind {}", http_addr))?;
        info!("HTTP server listening on http://{}", http_addr);
        axum::serve(listener, router(state))
            .await
            .context("HTTP server failed")
    })
}

async fn run_server(config: DashboardConfig) -> anyhow::Result<()> {
    info!("Starting SreeRaksha dashboard");
    info!(
        "Timers: clock {:?}, alerts {:?}, distress {:?}",
        config.clock_period, config.alert_period, config.distress_period
    );

    let state = build_state()?;
    let _timers = TimerSet::spawn(&state, &config);

    let http_addr = config
        .http_addr
        .clone()
        .context("serve needs an HTTP address")?;
    let server_handle = spawn_http(state, http_addr);

    tokio::select! {
        result = server_handle => {
            match result {
                Ok(Ok(())) => warn!("HTTP server task ended"),
                Ok(Err(e)) => {
                    error!("HTTP server error: {:#}", e);
                    return Err(e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}

async fn run_terminal(config: DashboardConfig) -> anyhow::Result<()> {
    let state = build_state()?;
    let _timers = TimerSet::spawn(&state, &config);

    let server_handle = config
        .http_addr
        .clone()
        .map(|addr| spawn_http(state.clone(), addr));

    let result = tui::run_tui(tui::TuiApp::new(state)).await;

    if let Some(handle) = server_handle {
        handle.abort();
    }
    result
}
