// src/upstream/mod.rs
//! Clients for the third-party statistics API.

pub mod historical;

pub use historical::{HistoricalSource, HttpHistoricalSource, SeriesMetric};

use crate::config::Config;
use crate::error::StatsError;
use crate::models::{ContinentRecord, CountryRecord};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Source of truth for the current country and continent snapshots.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, StatsError>;

    async fn fetch_continents(&self) -> Result<Vec<ContinentRecord>, StatsError>;
}

/// Builds the shared reqwest client. The timeout is the only deadline applied
/// to upstream calls.
pub fn build_http_client(timeout_secs: u64) -> Result<Client, StatsError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| StatsError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    countries_url: String,
    continents_url: String,
}

impl HttpUpstream {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            countries_url: config.api_url.clone(),
            continents_url: config.continent_api_url.clone(),
        }
    }

    /// Single GET, no retries.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error {} from {}", status, url);
            return Err(StatsError::UpstreamUnavailable(format!(
                "{} answered with status {}",
                url, status
            )));
        }
        response.json::<T>().await.map_err(|e| {
            StatsError::UpstreamUnavailable(format!(
                "Failed to decode response from {}: {}",
                url, e
            ))
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, StatsError> {
        self.get_json(&self.countries_url).await
    }

    async fn fetch_continents(&self) -> Result<Vec<ContinentRecord>, StatsError> {
        self.get_json(&self.continents_url).await
    }
}
