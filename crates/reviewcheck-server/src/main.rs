//! ReviewCheck Server
//!
//! HTTP API for moderating location-based reviews.
//!
//! Classifies reviews as clean or as advertisement, irrelevant content or
//! rants from reviewers who never visited, using either a trained model or
//! lexicon rules.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use reviewcheck_classifiers::EngineKind;
use reviewcheck_server::{create_router, AppState, Overrides, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "reviewcheck-server")]
#[command(about = "ReviewCheck review moderation API", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Decision engine (probabilistic or heuristic)
    #[arg(short, long)]
    engine: Option<EngineKind>,

    /// Model artifact path; may be repeated, tried in order
    #[arg(short, long = "model")]
    model: Vec<PathBuf>,

    /// Listen address
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            engine: self.engine,
            models: self.model.clone(),
            listen: self.listen.clone(),
            port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting ReviewCheck Server");

    let config = ServerConfig::load(&cli.config, &cli.overrides())?;
    info!(
        engine = %config.classifier.engine,
        decision_method = config.classifier.engine.decision_method(),
        "Configuration loaded successfully"
    );

    let metrics_handle = init_metrics()?;

    let state = AppState::from_config(&config.classifier)?.with_metrics(metrics_handle);
    if state.requires_model() && !state.model.is_loaded() {
        warn!(
            "Probabilistic engine has no model; model-backed endpoints will answer 500 ({})",
            state.model.diagnostics()
        );
    }

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("reviewcheck=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reviewcheck=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "reviewcheck_reviews_total",
        "Reviews classified, by engine"
    );
    metrics::describe_counter!("reviewcheck_flags_total", "Moderation flags raised, by flag");
    metrics::describe_counter!(
        "reviewcheck_skipped_rows_total",
        "Batch rows skipped for blank text"
    );
    metrics::describe_counter!("reviewcheck_errors_total", "Classification errors, by kind");

    info!("Metrics exporter initialized");
    Ok(handle)
}
