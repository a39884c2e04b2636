use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use inkshelf_blob::LocalBlobStore;
use inkshelf_catalog::ComicCatalog;
use inkshelf_feedback_memory::MemoryFeedbackStore;
use inkshelf_server::api::AppState;
use inkshelf_server::config::InkshelfConfig;

/// Inkshelf comic upload server.
#[derive(Parser, Debug)]
#[command(name = "inkshelf-server", about = "HTTP server for comic uploads and feedback")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "inkshelf.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Override the upload storage directory.
    #[arg(long)]
    storage_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber from RUST_LOG or default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = InkshelfConfig::load(Path::new(&cli.config))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.storage_dir {
        config.storage.directory = dir;
    }

    let blobs = LocalBlobStore::open(&config.storage.directory).await?;
    let storage_dir = blobs.root().to_path_buf();
    info!(path = %storage_dir.display(), "upload storage ready");

    let state = AppState {
        catalog: Arc::new(ComicCatalog::new(Arc::new(blobs))),
        feedback: Arc::new(MemoryFeedbackStore::new()),
        storage_dir,
        fallback_origin: config.server.fallback_origin(),
        public_url: config.server.public_url.clone(),
        max_upload_bytes: config.server.max_upload_bytes,
    };
    let app = inkshelf_server::api::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "inkshelf-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM. Once the signal
    // arrives, in-flight requests get the configured timeout to drain.
    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_seconds);
    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(shutdown_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_seconds,
                "shutdown timeout exceeded, dropping in-flight requests"
            );
        }
    }

    info!("inkshelf-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
