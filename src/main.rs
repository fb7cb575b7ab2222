//! bob-mcp binary: stdio MCP server for the Bob exchange.
//!
//! Usage:
//!   bob-mcp
//!   bob-mcp --exchange-dir /path/to/exchange
//!
//! The protocol runs on stdin/stdout; diagnostics go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use bob_mcp::config;
use bob_mcp::exchange::ExchangePaths;
use bob_mcp::BobServer;

/// MCP server that delegates code generation to Bob.
#[derive(Parser, Debug)]
#[command(name = "bob-mcp")]
#[command(about = "MCP server delegating generate_code to Bob via a file exchange")]
struct Args {
    /// Exchange directory shared with Bob (default: $BOB_EXCHANGE_DIR
    /// or ~/.local/share/bob-mcp/exchange)
    #[arg(long)]
    exchange_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing to stderr: stdout carries the MCP protocol.
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let dir = config::resolve_exchange_dir(args.exchange_dir);
    tracing::info!(dir = %dir.display(), "exchange directory");

    let paths = ExchangePaths::new(dir);
    paths.ensure();

    let service = BobServer::new(paths)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("MCP server error: {:?}", e);
        })?;

    tracing::info!("bob-mcp server ready, waiting for requests");
    service.waiting().await?;
    tracing::info!("bob-mcp server shutting down");
    Ok(())
}
