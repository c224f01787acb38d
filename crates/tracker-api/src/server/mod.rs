//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracker_common::{AppConfig, AppError};
use tracker_core::SentimentClassifier;
use tracker_db::{connect, MemoryStore, PoolSettings};
use tracker_service::{HttpSentimentClassifier, ServiceContext};

use crate::middleware::{apply_middleware, apply_middleware_with_config, ensure_session};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` when the middleware settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = create_router().layer(from_fn_with_state(state.clone(), ensure_session));
    let api = apply_middleware_with_config(
        api,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(Router::new().merge(api).merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// Uses PostgreSQL when `DATABASE_URL` is set and the in-memory store
/// otherwise.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let classifier = create_classifier(&config)?;

    let service_context = match PoolSettings::from_config(&config.database) {
        Some(settings) => {
            info!("Connecting to PostgreSQL...");
            let pool = connect(&settings, config.database.run_migrations)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");
            ServiceContext::postgres(pool, classifier)
        }
        None => {
            warn!("DATABASE_URL not set, using the in-memory store; data is lost on restart");
            ServiceContext::in_memory(Arc::new(MemoryStore::new()), classifier)
        }
    };

    Ok(AppState::new(service_context, config))
}

fn create_classifier(
    config: &AppConfig,
) -> Result<Option<Arc<dyn SentimentClassifier>>, AppError> {
    let classifier = HttpSentimentClassifier::from_config(&config.sentiment)
        .map_err(|e| AppError::Config(e.to_string()))?;

    match classifier {
        Some(classifier) => {
            info!(api_url = %config.sentiment.api_url, "Sentiment classification enabled");
            Ok(Some(Arc::new(classifier)))
        }
        None => {
            warn!("SENTIMENT_API_TOKEN not set, new comments will not be classified");
            Ok(None)
        }
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.api.address().parse().map_err(|e| {
        AppError::Config(format!("Invalid API_HOST/API_PORT {}: {e}", config.api.address()))
    })?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
