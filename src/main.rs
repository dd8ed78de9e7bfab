//! Small YAML-driven redirect server.
//!
//! ```text
//! Client Request ──▶ RedirectService ──▶ 302 Found + Location   (mapped path)
//!                        │
//!                        └─────────────▶ fallback Router (404)  (everything else)
//! ```
//!
//! Loads the path-to-URL document once at startup; a load failure aborts the
//! process rather than serving with a partial mapping.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{StatusCode, Uri};
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tower::make::Shared;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shortcut::document;

#[derive(Parser)]
#[command(name = "shortcut")]
#[command(about = "YAML-driven path-to-URL redirect server", long_about = None)]
struct Args {
    /// Path to the YAML document of path/url records.
    #[arg(short, long, default_value = "paths.yaml")]
    document: PathBuf,

    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortcut=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    tracing::info!("shortcut v0.1.0 starting");

    let fallback = Router::new()
        .fallback(no_shortcut)
        .layer(TraceLayer::new_for_http());

    let service = match document::yaml_service(&args.document, fallback) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(
                document = %args.document.display(),
                error = %e,
                "Failed to load redirect document"
            );
            std::process::exit(1);
        }
    };

    tracing::info!(
        document = %args.document.display(),
        "Redirect mapping loaded"
    );

    let listener = TcpListener::bind(args.bind).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    axum::serve(listener, Shared::new(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Default response for paths without a mapping.
async fn no_shortcut(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("no shortcut for {}\n", uri.path()))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
