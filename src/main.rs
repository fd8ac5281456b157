//! Contact form relay.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser form            ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server  ─▶ http::contact            │
//!       POST /api/contact     │   (request id,      (method check,          │
//!                             │    CORS, timeout)    body read)             │
//!                             │                        │                      │
//!                             │                        ▼                      │
//!                             │   submission::validate (size, presence,       │
//!                             │     email shape, honeypot, sanitize)          │
//!                             │                        │ Accepted             │
//!                             │                        ▼                      │
//!                             │   tracker::Forwarder ─▶ tracker::client ──────┼──▶ GitHub Issues
//!     {success:true} /        │                        │                      │
//!     {error:"..."}  ◀────────┼──── error::ContactError ◀─┘                   │
//!                             └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use contact_relay::config::{self, RelayConfig};
use contact_relay::observability::{logging, metrics};
use contact_relay::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "contact-relay")]
#[command(about = "Relays website contact-form submissions to GitHub Issues", long_about = None)]
struct Args {
    /// TOML configuration file. Without one, defaults plus environment are used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config: RelayConfig = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::load_from_env()?,
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("contact-relay v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        repository = %config.tracker.repository,
        max_payload_chars = config.limits.max_payload_chars,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::from_config(config)?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
