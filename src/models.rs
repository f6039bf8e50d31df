// src/models.rs
//! Wire and cache shapes for country statistics.
//!
//! Field names are fixed by the public JSON API (camelCase), and the same
//! serialization is used for the snapshots stored in the cache.

use serde::{Deserialize, Serialize};

/// Name of the synthetic aggregate row some upstream feeds include.
pub const WORLD: &str = "World";

/// Statistics for one country as reported upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_cases: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deaths: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_deaths: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recovered: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub critical: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases_per_one_million: f64,
}

/// The full country dataset. Cached and replaced as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Countries {
    pub data: Vec<CountryRecord>,
}

impl Countries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<CountryRecord>> for Countries {
    fn from(data: Vec<CountryRecord>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub today_per_cent_of_total_cases: u64,
    pub today_per_cent_of_total_deaths: u64,
    pub total_cases: u64,
    pub total_deaths: u64,
    pub today_total_cases: u64,
    pub today_total_deaths: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    pub country: String,
    pub today_per_cent_of_total_cases: u64,
    pub today_per_cent_of_total_deaths: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryNames {
    pub countries: Vec<String>,
}

/// Continent-level aggregate, served by `/continent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentRecord {
    pub continent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_cases: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deaths: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_deaths: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recovered: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub critical: u64,
    #[serde(default)]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Continents {
    pub data: Vec<ContinentRecord>,
}

impl Continents {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<ContinentRecord>> for Continents {
    fn from(data: Vec<ContinentRecord>) -> Self {
        Self { data }
    }
}

/// One side of a comparison: a country and its per-day values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCurve {
    pub country: String,
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub country_one: CountryCurve,
    pub country_two: CountryCurve,
}

// Request bodies

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRequest {
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    #[serde(rename = "type", default)]
    pub sort_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub country_one: String,
    pub country_two: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub error_message: String,
    pub code: u16,
}

/// Upstream feeds send `null` for counts they don't track.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_upstream_country_with_nulls_and_extra_fields() {
        let raw = r#"{
            "country": "Greece",
            "countryInfo": {"iso2": "GR"},
            "cases": 1061,
            "todayCases": 0,
            "deaths": 37,
            "todayDeaths": 5,
            "recovered": null,
            "active": 972,
            "critical": 66,
            "casesPerOneMillion": 102.5
        }"#;
        let record: CountryRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.country, "Greece");
        assert_eq!(record.deaths, 37);
        assert_eq!(record.recovered, 0);
        assert_approx_eq!(record.cases_per_one_million, 102.5);
    }

    #[test]
    fn serializes_with_public_field_names() {
        let stats = CountryStats {
            country: "Italy".into(),
            today_per_cent_of_total_cases: 4,
            today_per_cent_of_total_deaths: 5,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "country": "Italy",
                "todayPerCentOfTotalCases": 4,
                "todayPerCentOfTotalDeaths": 5
            })
        );

        let comparison = ComparisonResult {
            country_one: CountryCurve { country: "Spain".into(), data: vec![1, 2] },
            country_two: CountryCurve { country: "Italy".into(), data: vec![] },
        };
        let value = serde_json::to_value(&comparison).unwrap();
        assert_eq!(value["countryOne"]["data"], serde_json::json!([1, 2]));
        assert_eq!(value["countryTwo"]["country"], "Italy");
    }

    #[test]
    fn sort_request_reads_type_field() {
        let req: SortRequest = serde_json::from_str(r#"{"type":"deaths"}"#).unwrap();
        assert_eq!(req.sort_type, "deaths");
        let empty: SortRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.sort_type, "");
    }
}
