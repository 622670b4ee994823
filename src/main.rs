#![forbid(unsafe_code)]

//! `switchboard`: MCP gateway binary.
//!
//! Loads configuration and credentials, builds the operation registry, and
//! serves it over stdio or HTTP until EOF or a shutdown signal.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use switchboard::mcp::{http, transport};
use switchboard::registry::OperationRegistry;
use switchboard::{AppError, GlobalConfig, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Debug, Parser)]
#[command(name = "switchboard", about = "MCP gateway for Front, Pipedrive, Instantly and Dealfront", version, long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Transport to serve the MCP protocol on.
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(args.log_format) {
        eprintln!("switchboard: {err}");
        return ExitCode::FAILURE;
    }

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))
        .and_then(|runtime| runtime.block_on(run(args)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "switchboard exited with an error");
            eprintln!("switchboard: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = match &args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    config.load_credentials()?;
    info!("configuration loaded");

    let registry = Arc::new(OperationRegistry::from_config(&config)?);
    info!(operations = registry.len(), "operation registry built");

    // ── Serve until shutdown ────────────────────────────
    let ct = CancellationToken::new();
    let signal_ct = ct.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received");
        signal_ct.cancel();
    });

    match args.transport {
        Transport::Stdio => transport::serve_stdio(registry, ct).await?,
        Transport::Http => http::serve_http(&config, registry, ct).await?,
    }

    info!("switchboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
