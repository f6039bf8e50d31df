// src/api/mod.rs
//! HTTP server exposing the statistics endpoints.

pub mod handlers;

use crate::cache::{CacheStore, MemoryCache, RedisCache};
use crate::compare::CompareService;
use crate::config::{CacheBackend, Config};
use crate::dataset::DatasetAccessor;
use crate::error::StatsError;
use crate::models::ErrorMessage;
use crate::stats::StatsService;
use crate::upstream::{build_http_client, HttpHistoricalSource, HttpUpstream};
use crate::utils::timing::Timer;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info, warn};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub stats: StatsService,
    pub compare: CompareService,
}

impl AppState {
    pub fn new(stats: StatsService, compare: CompareService) -> Self {
        Self { stats, compare }
    }

    /// Wires the concrete Redis/HTTP collaborators described by `config`.
    pub async fn from_config(config: &Config) -> Result<Self, StatsError> {
        let http_client = build_http_client(config.http_timeout_secs)?;
        let cache: Arc<dyn CacheStore> = match config.cache_backend {
            CacheBackend::Redis => {
                Arc::new(RedisCache::new(&config.redis_url, config.cache_expiry).await?)
            }
            CacheBackend::Memory => {
                warn!("Using in-process cache; snapshots are not shared between instances");
                Arc::new(MemoryCache::new(config.cache_expiry))
            }
        };
        let upstream = Arc::new(HttpUpstream::new(http_client.clone(), config));
        let history = Arc::new(HttpHistoricalSource::new(
            http_client,
            &config.historical_api_url,
        )?);

        let dataset = DatasetAccessor::new(cache, upstream);
        Ok(Self::new(StatsService::new(dataset), CompareService::new(history)))
    }
}

pub struct ApiServer {
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(port: u16, state: AppState) -> Self {
        Self { port, state }
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let app = router(self.state);
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", self.port)).await?;
        info!("Statistics server listening on port {}", self.port);
        axum::serve(listener, app).await
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/total", get(handlers::total))
        .route("/countries", get(handlers::countries))
        .route("/countries/all", get(handlers::country_names))
        .route("/continent", get(handlers::continents))
        .route("/country", post(handlers::country))
        .route("/sort", post(handlers::sort))
        .route("/stats", post(handlers::country_stats))
        .route("/compare", post(handlers::compare_deaths))
        .route("/compare/firstdeath", post(handlers::compare_from_first_death))
        .route("/compare/perday", post(handlers::compare_deaths_per_day))
        .route("/compare/percent", post(handlers::compare_deaths_percent))
        .route("/compare/recovery", post(handlers::compare_recovered))
        .route("/compare/cases", post(handlers::compare_cases))
        .route("/compare/cases/unique", post(handlers::compare_cases_per_day))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let timer = Timer::start(request.uri().path());
    let response = next.run(request).await;
    timer.finish(response.status().as_u16());
    response
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(
                "Request failed ({:?}, recoverable: {}): {}",
                self.categorize(),
                self.is_recoverable(),
                self
            );
        } else {
            warn!("Request rejected: {}", self);
        }
        let body = ErrorMessage {
            error_message: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
