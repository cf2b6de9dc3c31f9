//! edge-gate
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!   Client Request   │                  EDGE GATE                   │
//!  ──────────────────┼─▶ /_edge/cors          → CORS responder      │
//!                    │   /_edge/apply-cookie  → cookie stub         │
//!                    │   /_edge/invoke        → filter (event JSON) │
//!                    │   everything else                            │
//!                    │     → edge filter ──deny──▶ 401 Basic        │
//!                    │         │ allow + default document           │
//!                    │         ▼                                    │
//!                    │     static origin directory                  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! `invoke` runs one handler against an event and prints the JSON result,
//! the same shape the edge runtime receives.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use edge_gate::config::{load_config, watcher::ConfigWatcher, EdgeConfig};
use edge_gate::handlers::{invoke, InvokeTarget};
use edge_gate::lifecycle::{signals::shutdown_on_signal, Shutdown};
use edge_gate::observability;
use edge_gate::HttpServer;

#[derive(Parser)]
#[command(name = "edge-gate", version)]
#[command(about = "Edge access filter and gateway handlers", long_about = None)]
struct Cli {
    /// TOML configuration file. Environment overrides apply on top.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the handlers and the guarded origin over HTTP
    Serve {
        /// Reload handlers when the config file changes
        #[arg(long)]
        watch: bool,
    },
    /// Run one handler and print its JSON result
    Invoke {
        handler: InvokeTarget,

        /// Event file for edge-filter (stdin when omitted)
        #[arg(long)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    observability::logging::init(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { watch } => serve(config, cli.config, watch).await,
        Commands::Invoke { handler, event } => {
            let raw_event = match (handler, event) {
                (_, Some(path)) => Some(fs::read_to_string(path)?),
                (InvokeTarget::EdgeFilter, None) => {
                    let mut raw = String::new();
                    io::stdin().read_to_string(&mut raw)?;
                    Some(raw)
                }
                (_, None) => None,
            };
            println!("{}", invoke(&config, handler, raw_event.as_deref())?);
            Ok(())
        }
    }
}

async fn serve(
    config: EdgeConfig,
    config_path: Option<PathBuf>,
    watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("edge-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        origin = %config.origin.root,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        observability::metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let server = HttpServer::new(config.clone())?;
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // The watcher stops when dropped; keep it for the life of the server.
    let (_watcher, config_updates) = match (watch, config_path) {
        (true, Some(path)) => {
            let (watcher, updates) = ConfigWatcher::new(&path);
            (Some(watcher.run()?), updates)
        }
        (true, None) => {
            tracing::warn!("--watch has no effect without --config");
            (None, mpsc::unbounded_channel().1)
        }
        (false, _) => (None, mpsc::unbounded_channel().1),
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown));

    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
