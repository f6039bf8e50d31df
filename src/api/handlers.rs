// src/api/handlers.rs
use super::AppState;
use crate::compare::CompareMode;
use crate::error::StatsError;
use crate::models::{
    ComparisonResult, CompareRequest, Continents, Countries, CountryNames, CountryRecord,
    CountryRequest, CountryStats, SortRequest, TotalStats,
};
use crate::stats::SortField;
use axum::{extract::State, response::Json};
use log::debug;
use serde_json::{json, Value};

type ApiResult<T> = Result<Json<T>, StatsError>;

pub async fn total(State(state): State<AppState>) -> ApiResult<TotalStats> {
    Ok(Json(state.stats.total_stats().await?))
}

pub async fn countries(State(state): State<AppState>) -> ApiResult<Countries> {
    Ok(Json(state.stats.get_all_countries().await?))
}

pub async fn country_names(State(state): State<AppState>) -> ApiResult<CountryNames> {
    Ok(Json(state.stats.all_country_names().await?))
}

pub async fn continents(State(state): State<AppState>) -> ApiResult<Continents> {
    Ok(Json(state.stats.get_continents().await?))
}

pub async fn country(
    State(state): State<AppState>,
    Json(request): Json<CountryRequest>,
) -> ApiResult<CountryRecord> {
    debug!("Country lookup for {:?}", request.country);
    Ok(Json(state.stats.get_country(&request.country).await?))
}

pub async fn sort(
    State(state): State<AppState>,
    Json(request): Json<SortRequest>,
) -> ApiResult<Countries> {
    let field = SortField::parse(&request.sort_type);
    Ok(Json(state.stats.sort_by(field).await?))
}

pub async fn country_stats(
    State(state): State<AppState>,
    Json(request): Json<CountryRequest>,
) -> ApiResult<CountryStats> {
    Ok(Json(state.stats.percentage_per_country(&request.country).await?))
}

async fn compare(
    state: AppState,
    request: CompareRequest,
    mode: CompareMode,
) -> ApiResult<ComparisonResult> {
    let result = state
        .compare
        .compare(mode, &request.country_one, &request.country_two)
        .await?;
    Ok(Json(result))
}

pub async fn compare_deaths(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::Deaths).await
}

pub async fn compare_from_first_death(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::DeathsFromFirst).await
}

pub async fn compare_deaths_per_day(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::DeathsPerDay).await
}

pub async fn compare_deaths_percent(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::DeathsPercentPerDay).await
}

pub async fn compare_recovered(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::Recovered).await
}

pub async fn compare_cases(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::Cases).await
}

pub async fn compare_cases_per_day(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<ComparisonResult> {
    compare(state, request, CompareMode::CasesPerDay).await
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "covid-stats",
        "timestamp": chrono::Utc::now().timestamp()
    }))
}
