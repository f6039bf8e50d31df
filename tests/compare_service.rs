//! Comparison curves built from a fake historical source.

mod common;

use common::MockHistory;
use covid_stats::{
    error::StatsError,
    models::CountryCurve,
    upstream::SeriesMetric,
    CompareMode, CompareService,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn history() -> MockHistory {
    MockHistory::default()
        .with("Spain", SeriesMetric::Deaths, vec![0, 0, 5, 9, 17])
        .with("Italy", SeriesMetric::Deaths, vec![0, 1, 3, 6, 12])
        .with("Spain", SeriesMetric::Cases, vec![1, 3, 6])
        .with("Italy", SeriesMetric::Cases, vec![2, 2, 10])
        .with("Spain", SeriesMetric::Recovered, vec![0, 0, 1])
        .with("Italy", SeriesMetric::Recovered, vec![0, 4, 8])
}

fn curve(country: &str, data: Vec<i64>) -> CountryCurve {
    CountryCurve {
        country: country.to_string(),
        data,
    }
}

async fn run(mode: CompareMode, one: &str, two: &str) -> (CountryCurve, CountryCurve) {
    let service = CompareService::new(Arc::new(history()));
    let result = service.compare(mode, one, two).await.unwrap();
    (result.country_one, result.country_two)
}

#[tokio::test]
async fn raw_deaths_are_passed_through() {
    let (one, two) = run(CompareMode::Deaths, "Spain", "Italy").await;
    assert_eq!(one, curve("Spain", vec![0, 0, 5, 9, 17]));
    assert_eq!(two, curve("Italy", vec![0, 1, 3, 6, 12]));
}

#[tokio::test]
async fn first_death_alignment_trims_each_side_independently() {
    let (one, two) = run(CompareMode::DeathsFromFirst, "Spain", "Italy").await;
    assert_eq!(one.data, vec![5, 9, 17]);
    assert_eq!(two.data, vec![1, 3, 6, 12]);
}

#[tokio::test]
async fn per_day_deaths() {
    let (one, two) = run(CompareMode::DeathsPerDay, "Spain", "Italy").await;
    assert_eq!(one.data, vec![0, 0, 5, 4, 8]);
    assert_eq!(two.data, vec![0, 1, 2, 3, 6]);
}

#[tokio::test]
async fn percent_growth_of_deaths() {
    let (one, two) = run(CompareMode::DeathsPercentPerDay, "Spain", "Italy").await;
    // 5->9 = 80%, 9->17 = 88%
    assert_eq!(one.data, vec![80, 88]);
    // 1->3 = 200%, 3->6 = 100%, 6->12 = 100%
    assert_eq!(two.data, vec![200, 100, 100]);
}

#[tokio::test]
async fn cases_recovered_and_unique_cases() {
    let (one, two) = run(CompareMode::Cases, "Spain", "Italy").await;
    assert_eq!((one.data, two.data), (vec![1, 3, 6], vec![2, 2, 10]));

    let (one, two) = run(CompareMode::CasesPerDay, "Spain", "Italy").await;
    assert_eq!((one.data, two.data), (vec![1, 2, 3], vec![2, 0, 8]));

    let (one, two) = run(CompareMode::Recovered, "Spain", "Italy").await;
    assert_eq!((one.data, two.data), (vec![0, 0, 1], vec![0, 4, 8]));
}

#[tokio::test]
async fn unknown_country_yields_empty_side_in_every_mode() {
    for mode in CompareMode::ALL {
        let (one, two) = run(mode, "Atlantis", "Italy").await;
        assert_eq!(one, curve("Atlantis", vec![]), "mode {:?}", mode);
        assert!(!two.data.is_empty(), "mode {:?}", mode);
    }
}

#[tokio::test]
async fn zero_base_in_percent_mode_is_a_domain_error() {
    let history = MockHistory::default()
        .with("Spain", SeriesMetric::Deaths, vec![0, 4, 0, 2])
        .with("Italy", SeriesMetric::Deaths, vec![1, 2]);
    let service = CompareService::new(Arc::new(history));
    let err = service
        .compare(CompareMode::DeathsPercentPerDay, "Spain", "Italy")
        .await
        .unwrap_err();
    assert!(matches!(err, StatsError::ArithmeticDomain(_)));
}

#[tokio::test]
async fn historical_outage_is_surfaced() {
    let service = CompareService::new(Arc::new(MockHistory::failing()));
    let err = service
        .compare(CompareMode::Deaths, "Spain", "Italy")
        .await
        .unwrap_err();
    assert!(matches!(err, StatsError::UpstreamUnavailable(_)));
}
