//! Shared fakes for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use covid_stats::{
    error::StatsError,
    models::{ContinentRecord, CountryRecord},
    upstream::{HistoricalSource, SeriesMetric, Upstream},
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upstream returning a fixed snapshot and counting fetches.
pub struct MockUpstream {
    countries: Vec<CountryRecord>,
    calls: AtomicUsize,
}

impl MockUpstream {
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self {
            countries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.countries.clone())
    }

    async fn fetch_continents(&self) -> Result<Vec<ContinentRecord>, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }
}

/// Historical source backed by an in-memory table; unknown countries get an
/// empty series, like the real endpoint's 404.
#[derive(Default)]
pub struct MockHistory {
    series: HashMap<(String, SeriesMetric), Vec<i64>>,
    fail: bool,
}

impl MockHistory {
    pub fn with(mut self, country: &str, metric: SeriesMetric, data: Vec<i64>) -> Self {
        self.series.insert((country.to_string(), metric), data);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl HistoricalSource for MockHistory {
    async fn fetch_series(
        &self,
        country: &str,
        metric: SeriesMetric,
    ) -> Result<Vec<i64>, StatsError> {
        if self.fail {
            return Err(StatsError::UpstreamUnavailable("historical API down".into()));
        }
        Ok(self
            .series
            .get(&(country.to_string(), metric))
            .cloned()
            .unwrap_or_default())
    }
}

pub fn country(
    name: &str,
    cases: u64,
    today_cases: u64,
    deaths: u64,
    today_deaths: u64,
) -> CountryRecord {
    CountryRecord {
        country: name.to_string(),
        cases,
        today_cases,
        deaths,
        today_deaths,
        ..Default::default()
    }
}

pub fn sample_countries() -> Vec<CountryRecord> {
    vec![
        country("World", 249_368, 10_000, 15_106, 1_000),
        country("Italy", 124_632, 4_805, 15_362, 681),
        country("Spain", 124_736, 5_537, 11_744, 546),
    ]
}
