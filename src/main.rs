//! service-prober
//!
//! Sidecar-style health-check aggregator: probes every configured TCP/HTTP
//! dependency concurrently on each request to /liveness or /readiness and
//! answers 200 "OK" or 503 with per-service diagnostics.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_prober::config;
use service_prober::http::HttpServer;
use service_prober::prober::Aggregator;

#[derive(Parser)]
#[command(name = "service-prober")]
#[command(about = "Aggregated liveness and readiness probes for service dependencies", long_about = None)]
struct Cli {
    /// Path to the YAML or JSON service configuration file
    #[arg(long)]
    config: PathBuf,

    /// Port to serve /liveness and /readiness on
    #[arg(long, default_value_t = 10000)]
    port: u16,

    /// Enable debug logging
    #[arg(short = 'D', long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "service_prober=debug,tower_http=debug"
    } else {
        "service_prober=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("service-prober v0.1.0 starting");

    // A bad configuration is fatal: never serve with a partial service list.
    let services = config::load_config(&cli.config)?;

    tracing::info!(
        config = %cli.config.display(),
        services = services.len(),
        "Configuration loaded"
    );

    let aggregator = Arc::new(Aggregator::with_network_probers(services));

    let listener = TcpListener::bind(("0.0.0.0", cli.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for health-check requests"
    );

    let server = HttpServer::new(aggregator);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
