//! Captioned speech HTTP server.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use caption_core::{ModelConfig, ServerConfig};
use caption_server::CaptionServer;
use runtime::logging::{init_logging, LogFormat};

/// Captioned speech server
#[derive(Debug, Parser)]
#[command(name = "caption-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(default_value_t = 8880)]
    port: u16,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(&args.log_level, format);

    let config = ServerConfig {
        port: args.port,
        ..Default::default()
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting captioned speech server"
    );

    let server = CaptionServer::new(config, ModelConfig::default());
    server.run().await.context("Server failed")?;

    info!("Server shutdown complete");
    Ok(())
}
