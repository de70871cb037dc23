use anyhow::{Context, Result};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use voltbill::{
    config::Config,
    handlers::AppState,
    services::{AnalyticsService, DocumentStore, RecordService, RedisStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting voltbill API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {:?}", config.environment);

    // Connect the document store. An unreachable store is fatal: the
    // process must not serve traffic in a broken state.
    let store: Arc<dyn DocumentStore> = Arc::new(
        RedisStore::connect(&config.store_url)
            .await
            .context("document store unavailable at startup")?,
    );

    // Build application state
    let records = Arc::new(RecordService::new(store.clone()));
    let analytics = Arc::new(AnalyticsService::new(store));

    let app_state = AppState { records, analytics };

    // Build router
    let app = voltbill::router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down gracefully...");
}
