//! HTTP API consumed by the browser front-end.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nimmo::chat::ChatService;
//! use nimmo::config::AppConfig;
//! use nimmo::llm::{ContextManager, GeminiGenerator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let service = ChatService::new(
//!         Arc::new(GeminiGenerator::from_config(&config.llm)),
//!         ContextManager::with_capacity(config.chat.history_window),
//!     );
//!     nimmo::server::serve(&config.server, service).await
//! }
//! ```

pub mod error;
pub mod routes;

use anyhow::{Context, Result};

use crate::chat::ChatService;
use crate::config::ServerConfig;

pub use error::ApiError;
pub use routes::{router, ApiState};

/// Bind to `config` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, service: ChatService) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;

    log::info!("Nimmo API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    log::info!("Nimmo API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
