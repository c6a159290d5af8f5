//! GitHub Assistant server
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=... GITHUB_USERNAME=octo LLM_API_KEY=... github-assistant
//! github-assistant --port 9000 --cors-origin http://localhost:4200
//! ```

use anyhow::Context;
use axum::Router;
use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github_assistant::{AppState, Config, routes};

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = origins
            .iter()
            .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin: {}", o)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.github_token.is_none() || config.github_username.is_none() {
        warn!("GITHUB_TOKEN or GITHUB_USERNAME not set; GitHub calls will fail");
    }
    if config.llm_api_key.is_none() {
        warn!("LLM_API_KEY not set; assistant requests will fail");
    }

    let state = AppState::from_config(&config);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!(
        addr = %addr,
        api = routes::API_BASE,
        model = %config.llm_model,
        "GitHub Assistant listening"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
