// src/stats/mod.rs
//! Country statistics served from the cached dataset.

pub mod aggregate;
pub mod sort;

pub use sort::SortField;

use crate::dataset::DatasetAccessor;
use crate::error::StatsError;
use crate::models::{
    Continents, Countries, CountryNames, CountryRecord, CountryStats, TotalStats,
};
use log::debug;

#[derive(Clone)]
pub struct StatsService {
    dataset: DatasetAccessor,
}

impl StatsService {
    pub fn new(dataset: DatasetAccessor) -> Self {
        Self { dataset }
    }

    pub async fn get_all_countries(&self) -> Result<Countries, StatsError> {
        self.dataset.get_all_countries().await
    }

    /// A name with no match is `NotFound`, never an all-zero record.
    pub async fn get_country(&self, name: &str) -> Result<CountryRecord, StatsError> {
        let countries = self.dataset.get_all_countries().await?;
        aggregate::find_country(&countries.data, name)
            .cloned()
            .ok_or_else(|| StatsError::NotFound(format!("country {:?}", name)))
    }

    pub async fn sort_by(&self, field: SortField) -> Result<Countries, StatsError> {
        let mut countries = self.dataset.get_all_countries().await?;
        debug!("Sorting {} countries by {:?}", countries.data.len(), field);
        sort::sort_countries(&mut countries.data, field);
        Ok(countries)
    }

    pub async fn total_stats(&self) -> Result<TotalStats, StatsError> {
        let countries = self.dataset.get_all_countries().await?;
        aggregate::total_stats(&countries.data)
    }

    pub async fn percentage_per_country(&self, name: &str) -> Result<CountryStats, StatsError> {
        let country = self.get_country(name).await?;
        aggregate::country_stats(&country)
    }

    pub async fn all_country_names(&self) -> Result<CountryNames, StatsError> {
        let countries = self.dataset.get_all_countries().await?;
        Ok(aggregate::country_names(&countries.data))
    }

    pub async fn get_continents(&self) -> Result<Continents, StatsError> {
        self.dataset.get_continents().await
    }
}
