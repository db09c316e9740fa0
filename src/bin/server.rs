//! slangify HTTP server binary.
//!
//! # Environment Variables
//!
//! - `HOST` — Bind host (default: 0.0.0.0)
//! - `PORT` — HTTP port (default: 3000)
//! - `HACKCLUB_API_KEY` — Credential for `/ai-transform` (optional; the local
//!   transform works without it)
//! - `SLANG_AI_BASE_URL` — Chat-completion API base (default: Hack Club AI proxy)
//! - `SLANG_AI_MODEL` — Model name (default: qwen/qwen3-32b)
//! - `SLANG_AI_TIMEOUT_SECS` — Delegate request timeout (default: 30)
//! - `RUST_LOG` — Tracing filter (default: "info,slangify=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use slangify::server::{app_router, AppState};
use slangify::{ChatCompletionDelegate, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,slangify=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    if config.delegate.api_key.is_none() {
        tracing::warn!("HACKCLUB_API_KEY not set; /ai-transform will report a configuration error");
    }

    let delegate = ChatCompletionDelegate::new(config.delegate.clone())
        .context("Failed to build HTTP client")?;
    let state = AppState::new(Arc::new(delegate)).context("Failed to load templates")?;
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    tracing::info!("slangify server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /             — input form");
    tracing::info!("  POST /transform    — local slang transform");
    tracing::info!("  POST /ai-transform — delegate slang transform");
    tracing::info!("  GET  /health       — liveness probe");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
