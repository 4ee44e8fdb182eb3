//! Vikunja MCP server binary.
//!
//! Loads the optional env file, sets up logging on stderr and serves the
//! tool catalog over stdio. Connection settings are read per tool call, so a
//! missing `VIKUNJA_URL` does not stop the server from starting.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vikunja_mcp::config::EnvConfig;
use vikunja_mcp::mcp::VikunjaServer;
use vikunja_mcp::vikunja::build_http_client;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Failed to load env file {path:?}: {source}")]
    #[diagnostic(code(vikunja_mcp::binary::env_file))]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    #[diagnostic(code(vikunja_mcp::binary::http))]
    Http(#[from] reqwest::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(
        code(vikunja_mcp::binary::transport),
        help("The server speaks MCP over stdio and must be launched by an MCP client")
    )]
    Transport { message: String },
}

#[derive(Parser)]
#[command(name = "vikunja-mcp")]
#[command(author, version, about = "Vikunja MCP server (stdio)", long_about = None)]
struct Cli {
    /// Env file with VIKUNJA_URL / VIKUNJA_TOKEN (ignored if it does not exist)
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Timeout for each request to Vikunja, in seconds
    #[arg(long, env = "VIKUNJA_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
}

/// Initialize tracing subscriber with env filter, writing to stderr
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vikunja_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_env_file(path: &PathBuf) -> Result<(), BinaryError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(source) => Err(BinaryError::EnvFile {
            path: path.clone(),
            source,
        }),
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    load_env_file(&cli.env_file)?;
    // Parse again so VIKUNJA_TIMEOUT_SECS from the env file is honoured.
    let cli = Cli::parse();
    init_tracing();

    let http = build_http_client(Duration::from_secs(cli.timeout_secs))?;
    let server = VikunjaServer::new(EnvConfig, http);

    info!("Starting Vikunja MCP server via stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| BinaryError::Transport {
            message: e.to_string(),
        })?;

    let quit_reason = service
        .waiting()
        .await
        .map_err(|e| BinaryError::Transport {
            message: e.to_string(),
        })?;
    info!("Vikunja MCP server stopped: {:?}", quit_reason);

    Ok(())
}
