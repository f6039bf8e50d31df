//! Descending, stable orderings of the country dataset.

use crate::models::CountryRecord;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Cases,
    Deaths,
    TodayCases,
    TodayDeaths,
    Recovered,
    Active,
    Critical,
    CasesPerOneMillion,
    /// Unknown or missing selector: upstream order.
    Unsorted,
}

impl FromStr for SortField {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "cases" => SortField::Cases,
            "deaths" => SortField::Deaths,
            "todayCases" => SortField::TodayCases,
            "todayDeaths" => SortField::TodayDeaths,
            "recovered" => SortField::Recovered,
            "active" => SortField::Active,
            "critical" => SortField::Critical,
            "casesPerOneMillion" => SortField::CasesPerOneMillion,
            _ => SortField::Unsorted,
        })
    }
}

impl SortField {
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or(SortField::Unsorted)
    }

    /// Ascending order on the sort key, with the secondary key for cases and
    /// deaths. `None` for `Unsorted`.
    fn compare(self, a: &CountryRecord, b: &CountryRecord) -> Option<Ordering> {
        Some(match self {
            SortField::Cases => a.cases.cmp(&b.cases).then(a.deaths.cmp(&b.deaths)),
            SortField::Deaths => a.deaths.cmp(&b.deaths).then(a.cases.cmp(&b.cases)),
            SortField::TodayCases => a.today_cases.cmp(&b.today_cases),
            SortField::TodayDeaths => a.today_deaths.cmp(&b.today_deaths),
            SortField::Recovered => a.recovered.cmp(&b.recovered),
            SortField::Active => a.active.cmp(&b.active),
            SortField::Critical => a.critical.cmp(&b.critical),
            SortField::CasesPerOneMillion => {
                a.cases_per_one_million.total_cmp(&b.cases_per_one_million)
            }
            SortField::Unsorted => return None,
        })
    }
}

/// Sorts in place, largest first. Ties keep their upstream order.
pub fn sort_countries(countries: &mut [CountryRecord], field: SortField) {
    if field == SortField::Unsorted {
        return;
    }
    countries.sort_by(|a, b| field.compare(b, a).unwrap_or(Ordering::Equal));
}
