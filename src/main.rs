//! Krishi Soil - Rust/Axum soil analysis service
//!
//! Fertilizer and soil recommendations for farmers' soil test results.
//! The website frontend calls this service and renders the reports.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod config;
mod db;
mod error;
mod history;
pub mod reference;
pub mod soil;

use cache::AppCache;
use config::Config;
use history::AnalysisHistory;
use reference::RequirementTable;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub requirements: Arc<RequirementTable>,
    pub cache: AppCache,
    pub history: AnalysisHistory,
}

impl AppState {
    pub fn new(requirements: RequirementTable, config: &Config) -> Self {
        Self {
            requirements: Arc::new(requirements),
            cache: AppCache::new(config.report_cache_capacity, config.report_cache_ttl),
            history: AnalysisHistory::new(
                config.history_max_sessions,
                config.history_max_entries,
                config.history_idle,
            ),
        }
    }
}

/// Build the router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check and cache stats
        .route("/health", get(health_check))
        .route("/health/cache", get(cache_stats))
        // Soil analysis API (called by the website)
        .nest("/api/soil", soil::router())
        // State and middleware
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krishi_soil_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Requirement table: database when configured, otherwise the built-in rows
    let requirements = match &config.database_url {
        Some(url) => {
            tracing::info!("Loading crop requirements from database...");
            let pool = db::connect(url).await?;
            let table = db::load_requirements(&pool).await?;
            pool.close().await;
            table
        }
        None => {
            tracing::info!("DATABASE_URL not set, using built-in crop requirements");
            RequirementTable::builtin()
        }
    };
    tracing::info!("Loaded {} crop requirement rows", requirements.len());

    let state = AppState::new(requirements, &config);
    let app = app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "requirement_rows": state.requirements.len(),
        "history_sessions": state.history.session_count().await,
        "service": "krishi-soil-web"
    }))
}

/// Cache statistics endpoint
async fn cache_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.cache.stats())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_health() {
        let app = app(AppState::new(RequirementTable::builtin(), &Config::default()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_cache_stats_count_repeated_analysis() {
        let app = app(AppState::new(RequirementTable::builtin(), &Config::default()));
        let sample = r#"{"nitrogen": 100, "phosphorus": 50, "potassium": 30, "ph": 6.5,
                         "plot_area": 1, "crop_id": 1, "state_id": 14, "district": "Pune"}"#;

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/soil/analyze")
                        .header("content-type", "application/json")
                        .body(Body::from(sample))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(Request::builder().uri("/health/cache").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["misses"], 1);
        assert_eq!(body["hits"], 2);
    }
}
