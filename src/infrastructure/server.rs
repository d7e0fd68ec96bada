//! Dev server
//!
//! Serves a bundle directory over HTTP. Responses are gzip-compressed only
//! when the options say so (production mode). There is no port fallback: a
//! bind failure is returned to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::domain::value_objects::ServerOptions;
use crate::error::{BundleError, BundleResult};

const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Static file router for the bundle directory.
pub fn router(options: &ServerOptions) -> Router {
    let files = ServeDir::new(options.root_dir()).append_index_html_on_directories(true);
    let router = Router::new().fallback_service(files);

    if options.compression_enabled() {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

/// Bind the configured address.
pub async fn bind(options: &ServerOptions) -> BundleResult<TcpListener> {
    let addr = options.addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| BundleError::ServerBind { addr, source })
}

/// Run the dev server until `running` is cleared.
///
/// Blocks the calling thread on its own runtime.
pub fn serve(options: &ServerOptions, running: Arc<AtomicBool>) -> BundleResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve_until_stopped(options, running))
}

async fn serve_until_stopped(options: &ServerOptions, running: Arc<AtomicBool>) -> BundleResult<()> {
    let listener = bind(options).await?;
    let local = listener.local_addr()?;
    tracing::info!(
        addr = %local,
        root = %options.root_dir().display(),
        compression = options.compression_enabled(),
        "dev server listening"
    );

    axum::serve(listener, router(options))
        .with_graceful_shutdown(wait_for_stop(running))
        .await?;

    tracing::info!("dev server stopped");
    Ok(())
}

async fn wait_for_stop(running: Arc<AtomicBool>) {
    while running.load(Ordering::SeqCst) {
        tokio::time::sleep(SHUTDOWN_POLL).await;
    }
}
