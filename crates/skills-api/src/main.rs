//! Skills Builder API server
//!
//! Serves the icon catalog and the legacy builder redirects.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use skills_api::{AppConfig, Server};

/// Skills Builder API - icon catalog proxy
#[derive(Parser, Debug)]
#[command(name = "skills-api")]
#[command(version, about = "Skills Builder icon catalog server", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "SKILLS_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long, env = "SKILLS_BIND")]
    bind: Option<SocketAddr>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("SKILLS_LOG")
                .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| "info,skills=debug".into()),
        )
        .init();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    match &args.config {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("Using default configuration"),
    }

    if let Err(e) = Server::new(config)?.serve().await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
