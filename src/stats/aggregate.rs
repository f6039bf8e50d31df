//! Pure statistics over a country dataset.

use crate::error::StatsError;
use crate::models::{CountryNames, CountryRecord, CountryStats, TotalStats, WORLD};

/// `part * 100 / whole`, truncated. A zero `whole` is an error, never a panic.
pub fn percent_of(part: u64, whole: u64, what: &str) -> Result<u64, StatsError> {
    if whole == 0 {
        return Err(StatsError::ArithmeticDomain(format!(
            "cannot compute percentage of {}: total is 0",
            what
        )));
    }
    part.checked_mul(100)
        .map(|scaled| scaled / whole)
        .ok_or_else(|| StatsError::ArithmeticDomain(format!("percentage of {} overflows", what)))
}

/// Exact, case-sensitive name match.
pub fn find_country<'a>(countries: &'a [CountryRecord], name: &str) -> Option<&'a CountryRecord> {
    countries.iter().find(|c| c.country == name)
}

fn checked_sum(acc: u64, value: u64, what: &str) -> Result<u64, StatsError> {
    acc.checked_add(value)
        .ok_or_else(|| StatsError::ArithmeticDomain(format!("sum of {} overflows", what)))
}

/// Global totals. The upstream "World" row is itself an aggregate and is skipped.
pub fn total_stats(countries: &[CountryRecord]) -> Result<TotalStats, StatsError> {
    let mut totals = TotalStats::default();
    for record in countries.iter().filter(|c| c.country != WORLD) {
        totals.total_cases = checked_sum(totals.total_cases, record.cases, "cases")?;
        totals.total_deaths = checked_sum(totals.total_deaths, record.deaths, "deaths")?;
        totals.today_total_cases =
            checked_sum(totals.today_total_cases, record.today_cases, "todayCases")?;
        totals.today_total_deaths =
            checked_sum(totals.today_total_deaths, record.today_deaths, "todayDeaths")?;
    }
    totals.today_per_cent_of_total_cases =
        percent_of(totals.today_total_cases, totals.total_cases, "totalCases")?;
    totals.today_per_cent_of_total_deaths =
        percent_of(totals.today_total_deaths, totals.total_deaths, "totalDeaths")?;
    Ok(totals)
}

pub fn country_stats(record: &CountryRecord) -> Result<CountryStats, StatsError> {
    Ok(CountryStats {
        country: record.country.clone(),
        today_per_cent_of_total_cases: percent_of(
            record.today_cases,
            record.cases,
            &format!("{} cases", record.country),
        )?,
        today_per_cent_of_total_deaths: percent_of(
            record.today_deaths,
            record.deaths,
            &format!("{} deaths", record.country),
        )?,
    })
}

pub fn country_names(countries: &[CountryRecord]) -> CountryNames {
    CountryNames {
        countries: countries.iter().map(|c| c.country.clone()).collect(),
    }
}
