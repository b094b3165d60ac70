//! envsettings HTTP host.
//!
//! Serves one environment of a settings file over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use envsettings::{
    LogConfig, LogFormat, LoggerImpl, SettingsComponent, SettingsHttpConfig, SettingsHttpServer,
};

#[derive(Parser, Debug)]
#[command(name = "envsettings")]
#[command(about = "Serve one environment of a TOML settings file over HTTP")]
struct Args {
    /// Path to the settings file
    #[arg(long, default_value = "settings.toml")]
    config: PathBuf,

    /// Environment section to serve
    #[arg(long)]
    env: String,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "9200")]
    port: u16,

    /// Enable permissive CORS
    #[arg(long)]
    cors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    /// Also write JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = LoggerImpl::init(&LogConfig {
        level: args.log_level.clone(),
        format: args.log_format,
        log_dir: args.log_dir.clone(),
        enable_stderr: true,
    })
    .context("Failed to initialize logging")?;

    let component = SettingsComponent::from_path(&args.config, &args.env).with_context(|| {
        format!(
            "Failed to load environment '{}' from {}",
            args.env,
            args.config.display()
        )
    })?;

    info!(
        config = %args.config.display(),
        environment = %args.env,
        "settings loaded"
    );

    let server = SettingsHttpServer::new(
        component,
        SettingsHttpConfig {
            host: args.host,
            port: args.port,
            enable_cors: args.cors,
        },
    );

    server
        .serve_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Settings HTTP server failed")?;

    Ok(())
}
