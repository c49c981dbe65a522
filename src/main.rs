//! dv-relay
//!
//! ```text
//!     Browser                       dv-relay                          Upstream API
//!     ───────                       ────────                          ────────────
//!     GET /index.html  ─────────▶  ServeDir (working directory)
//!     POST /api/proxy  ─────────▶  decode envelope
//!       {endpoint, method,          → build request (+ session header)
//!        body, session_token,       → execute (30s total) ─────────────▶
//!        user_agent}                ◀─────────────── status + body ─────
//!                      ◀─────────  gunzip if needed, status verbatim
//!     GET /api/health  ─────────▶  {"status":"ok"}
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use dv_relay::config::{load_config, RelayConfig};
use dv_relay::http::HttpServer;
use dv_relay::lifecycle::Shutdown;
use dv_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "dv-relay")]
#[command(about = "Local relay between the browser frontend and the delivery API", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "dv-relay starting"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Open http://localhost:{} in your browser", local_addr.port());

    // Held for the process lifetime; signals end the server through the same path.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
