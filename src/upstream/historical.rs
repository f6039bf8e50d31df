//! Per-day cumulative series from the historical endpoint.

use crate::error::StatsError;
use async_trait::async_trait;
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesMetric {
    Cases,
    Deaths,
    Recovered,
}

/// Ordered cumulative counts, one per calendar day starting 2020-01-22.
///
/// Every country shares that calendar, so series from different countries
/// line up by index. An unknown country yields an empty series, not an error.
#[async_trait]
pub trait HistoricalSource: Send + Sync {
    async fn fetch_series(&self, country: &str, metric: SeriesMetric)
        -> Result<Vec<i64>, StatsError>;
}

#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    timeline: Timeline,
}

#[derive(Debug, Default, Deserialize)]
struct Timeline {
    #[serde(default)]
    cases: HashMap<String, i64>,
    #[serde(default)]
    deaths: HashMap<String, i64>,
    #[serde(default)]
    recovered: HashMap<String, i64>,
}

impl Timeline {
    fn take(self, metric: SeriesMetric) -> HashMap<String, i64> {
        match metric {
            SeriesMetric::Cases => self.cases,
            SeriesMetric::Deaths => self.deaths,
            SeriesMetric::Recovered => self.recovered,
        }
    }
}

/// Orders a `{"M/D/YY": count}` map by date.
fn order_by_date(points: HashMap<String, i64>) -> Result<Vec<i64>, StatsError> {
    let dated = points
        .into_iter()
        .map(|(day, count)| {
            NaiveDate::parse_from_str(&day, "%m/%d/%y")
                .map(|date| (date, count))
                .map_err(|e| {
                    StatsError::UpstreamUnavailable(format!(
                        "Unparseable timeline date {}: {}",
                        day, e
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dated
        .into_iter()
        .sorted_by_key(|(date, _)| *date)
        .map(|(_, count)| count)
        .collect())
}

#[derive(Debug, Clone)]
pub struct HttpHistoricalSource {
    client: Client,
    base_url: Url,
}

impl HttpHistoricalSource {
    pub fn new(client: Client, base_url: &str) -> Result<Self, StatsError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            StatsError::ConfigError(format!("Invalid historical API URL {}: {}", base_url, e))
        })?;
        Ok(Self { client, base_url })
    }

    /// `{base}/{country}?lastdays=all`, with the country name percent-encoded.
    fn country_url(&self, country: &str) -> Result<Url, StatsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StatsError::ConfigError(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(country);
        url.query_pairs_mut().append_pair("lastdays", "all");
        Ok(url)
    }
}

#[async_trait]
impl HistoricalSource for HttpHistoricalSource {
    async fn fetch_series(
        &self,
        country: &str,
        metric: SeriesMetric,
    ) -> Result<Vec<i64>, StatsError> {
        if country.trim().is_empty() {
            return Ok(Vec::new());
        }
        let url = self.country_url(country)?;
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("No historical data for country {}", country);
                Ok(Vec::new())
            }
            status if !status.is_success() => {
                warn!("HTTP error {} from {}", status, url);
                Err(StatsError::UpstreamUnavailable(format!(
                    "{} answered with status {}",
                    url, status
                )))
            }
            _ => {
                let body: HistoricalResponse = response.json().await.map_err(|e| {
                    StatsError::UpstreamUnavailable(format!(
                        "Failed to decode historical data for {}: {}",
                        country, e
                    ))
                })?;
                order_by_date(body.timeline.take(metric))
            }
        }
    }
}
