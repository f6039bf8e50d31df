// src/compare/mod.rs
//! Side-by-side per-day curves for two countries.

pub mod curve;

use crate::error::StatsError;
use crate::models::{ComparisonResult, CountryCurve};
use crate::upstream::{HistoricalSource, SeriesMetric};
use log::debug;
use std::sync::Arc;

/// Which series is compared and how it is reshaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Cumulative deaths per calendar day.
    Deaths,
    /// Cumulative deaths from each country's own first death.
    DeathsFromFirst,
    DeathsPerDay,
    DeathsPercentPerDay,
    Recovered,
    Cases,
    /// New cases per day.
    CasesPerDay,
}

impl CompareMode {
    pub const ALL: [CompareMode; 7] = [
        CompareMode::Deaths,
        CompareMode::DeathsFromFirst,
        CompareMode::DeathsPerDay,
        CompareMode::DeathsPercentPerDay,
        CompareMode::Recovered,
        CompareMode::Cases,
        CompareMode::CasesPerDay,
    ];

    pub fn metric(self) -> SeriesMetric {
        match self {
            CompareMode::Deaths
            | CompareMode::DeathsFromFirst
            | CompareMode::DeathsPerDay
            | CompareMode::DeathsPercentPerDay => SeriesMetric::Deaths,
            CompareMode::Recovered => SeriesMetric::Recovered,
            CompareMode::Cases | CompareMode::CasesPerDay => SeriesMetric::Cases,
        }
    }

    /// Reshapes one raw cumulative series.
    pub fn apply(self, series: Vec<i64>) -> Result<Vec<i64>, StatsError> {
        Ok(match self {
            CompareMode::Deaths | CompareMode::Recovered | CompareMode::Cases => series,
            CompareMode::DeathsFromFirst => curve::from_first_event(&series),
            CompareMode::DeathsPerDay | CompareMode::CasesPerDay => curve::per_day(&series),
            CompareMode::DeathsPercentPerDay => curve::percent_per_day(&series)?,
        })
    }
}

#[derive(Clone)]
pub struct CompareService {
    history: Arc<dyn HistoricalSource>,
}

impl CompareService {
    pub fn new(history: Arc<dyn HistoricalSource>) -> Self {
        Self { history }
    }

    /// Both series are fetched concurrently. An unknown country comes back as
    /// an empty `data` array on its side only.
    pub async fn compare(
        &self,
        mode: CompareMode,
        country_one: &str,
        country_two: &str,
    ) -> Result<ComparisonResult, StatsError> {
        let metric = mode.metric();
        let (one, two) = futures::try_join!(
            self.history.fetch_series(country_one, metric),
            self.history.fetch_series(country_two, metric),
        )?;
        debug!(
            "Comparing {:?}: {} has {} days, {} has {} days",
            mode,
            country_one,
            one.len(),
            country_two,
            two.len()
        );
        Ok(ComparisonResult {
            country_one: CountryCurve {
                country: country_one.to_string(),
                data: mode.apply(one)?,
            },
            country_two: CountryCurve {
                country: country_two.to_string(),
                data: mode.apply(two)?,
            },
        })
    }
}
