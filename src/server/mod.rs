//! HTTP front end for the conversion service.
//!
//! Thin routing over [`ConversionService`]: request validation, status-code
//! mapping and correction management. Conversion itself never happens here.

mod handlers;

use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::service::ConversionService;

pub use handlers::ApiError;

/// Build the router with every endpoint
pub fn router(service: Arc<ConversionService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/help", get(handlers::help))
        .route("/convert", post(handlers::convert))
        .route(
            "/corrections",
            get(handlers::list_corrections)
                .post(handlers::add_corrections)
                .delete(handlers::clear_corrections),
        )
        .route("/corrections/:phrase", delete(handlers::remove_correction))
        .route(
            "/custom-mappings",
            get(handlers::list_custom_mappings)
                .post(handlers::add_custom_mappings)
                .delete(handlers::clear_custom_mappings),
        )
        .route(
            "/custom-mappings/:phrase",
            delete(handlers::remove_custom_mapping),
        )
        .with_state(service)
}

/// Serve until Ctrl+C. Initialization runs in the background; requests that
/// arrive before it finishes get 503.
pub async fn serve(service: Arc<ConversionService>) -> std::io::Result<()> {
    let bind = service.config().bind().to_string();
    let listener = TcpListener::bind(&bind).await?;
    crate::info!("Listening on http://{}", listener.local_addr()?);

    let init_service = Arc::clone(&service);
    tokio::spawn(async move {
        // Failure is recorded in the service status and logged there
        let _ = init_service.initialize().await;
    });

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        crate::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    crate::info!("Shutting down");
}
