//! Quiz navigator shell server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser request ──▶ http server ──▶ route table ──▶ Matched  → 200 + SPA shell
//!                          (request id,     (immutable)  ──▶ Redirect → 307 Location
//!                           trace,                        ──▶ NotFound → 404 / fallback
//!                           timeout)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use quiz_navigator::lifecycle::startup;
use quiz_navigator::observability::{logging, metrics};
use quiz_navigator::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "quiz-navigator")]
#[command(about = "History-mode shell server for the quiz application", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = startup::prepare(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("quiz-navigator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Already validated by startup::prepare.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(error = %e, "Failed to parse metrics address"),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
