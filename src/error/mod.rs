// src/error/mod.rs
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    /// Cache transport failures (connection refused, broken pipe, etc.)
    #[error("Cache Unavailable: {0}")]
    CacheUnavailable(String),

    /// Cached payload could not be decoded. Recovered locally as a cache miss.
    #[error("Cache Corrupt: {0}")]
    CacheCorrupt(String),

    /// Fetch or decode failure from the third-party statistics API
    #[error("Upstream Unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Percentage computed against a zero denominator
    #[error("Arithmetic Domain Error: {0}")]
    ArithmeticDomain(String),

    /// Country (or other named entity) missing from the dataset
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Malformed request parameters
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::CacheCorrupt(format!("JSON serialization/deserialization error: {}", err))
    }
}

impl From<redis::RedisError> for StatsError {
    fn from(err: redis::RedisError) -> Self {
        StatsError::CacheUnavailable(format!("Redis error: {}", err))
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        StatsError::UpstreamUnavailable(format!("HTTP client error: {}", err))
    }
}

impl StatsError {
    /// Whether the failure may clear up on a later request without intervention.
    /// The core never retries itself; the HTTP layer reports it in error logs.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StatsError::CacheUnavailable(_) => true, // Redis might recover
            StatsError::CacheCorrupt(_) => true,     // Next write replaces the payload
            StatsError::UpstreamUnavailable(_) => true,
            StatsError::ArithmeticDomain(_) => false, // Data won't change until the next snapshot
            StatsError::NotFound(_) => false,
            StatsError::InvalidInput(_) => false,
            StatsError::ConfigError(_) => false,
        }
    }

    /// Categorizes error for logging
    pub fn categorize(&self) -> ErrorCategory {
        match self {
            StatsError::CacheUnavailable(_) | StatsError::CacheCorrupt(_) => {
                ErrorCategory::Infrastructure
            }
            StatsError::UpstreamUnavailable(_) => ErrorCategory::Network,
            StatsError::ArithmeticDomain(_) => ErrorCategory::Data,
            StatsError::NotFound(_) | StatsError::InvalidInput(_) => ErrorCategory::Request,
            StatsError::ConfigError(_) => ErrorCategory::Configuration,
        }
    }

    /// HTTP status the boundary layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            StatsError::NotFound(_) => 404,
            StatsError::InvalidInput(_) => 400,
            StatsError::ArithmeticDomain(_) => 422,
            StatsError::CacheUnavailable(_) | StatsError::UpstreamUnavailable(_) => 503,
            StatsError::CacheCorrupt(_) | StatsError::ConfigError(_) => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorCategory {
    Network,
    Data,
    Request,
    Configuration,
    Infrastructure,
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(StatsError::NotFound("Atlantis".into()).status_code(), 404);
        assert_eq!(StatsError::InvalidInput("bad".into()).status_code(), 400);
        assert_eq!(StatsError::ArithmeticDomain("0".into()).status_code(), 422);
        assert_eq!(StatsError::UpstreamUnavailable("down".into()).status_code(), 503);
        assert_eq!(StatsError::CacheUnavailable("down".into()).status_code(), 503);
    }

    #[test]
    fn json_errors_map_to_cache_corrupt() {
        let err: StatsError = serde_json::from_str::<Vec<u64>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, StatsError::CacheCorrupt(_)));
        assert_eq!(err.categorize(), ErrorCategory::Infrastructure);
        assert!(err.is_recoverable());
    }

    #[test]
    fn redis_errors_map_to_cache_unavailable() {
        let err: StatsError =
            redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into();
        assert!(matches!(err, StatsError::CacheUnavailable(_)));
        assert_eq!(err.status_code(), 503);
        assert!(err.is_recoverable());
    }

    #[test]
    fn arithmetic_errors_are_not_recoverable() {
        let err = StatsError::ArithmeticDomain("totalDeaths is 0".into());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Arithmetic Domain Error: totalDeaths is 0");
    }
}
