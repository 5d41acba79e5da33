mod error;
mod routes;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use pathforge_runtime_config::{PathforgeConfig, CONFIG_PATH_ENV};

/// Application state shared across all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PathforgeConfig>,
}

impl AppState {
    pub fn new(config: PathforgeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the full router: credential API, health, home page and the
/// catch-all generate route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // API
        .route("/api/health", get(routes::health::health))
        .route("/api/set-cookie", post(routes::credentials::set_api_key))
        .route("/api/get-cookie", get(routes::credentials::get_api_key))
        .route(
            "/api/delete-cookie",
            delete(routes::credentials::delete_api_key),
        )
        // Pages
        .route("/", get(routes::home::home))
        .route("/favicon.ico", get(routes::home::favicon))
        .route("/{*path}", get(routes::generate::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn load_config() -> anyhow::Result<PathforgeConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let mut config =
        PathforgeConfig::load(explicit.as_deref()).context("loading pathforge configuration")?;
    if config.apply_env_overrides()? {
        tracing::info!("configuration overridden from environment");
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pathforge_server=info,tower_http=info".into()),
        )
        .init();

    let config = load_config()?;
    tracing::info!(
        upstream = %config.upstream.base_url,
        model = %config.upstream.model,
        max_path_len = config.server.max_path_len,
        "configuration loaded"
    );

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let app = build_router(AppState::new(config));

    tracing::info!("starting server at http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
