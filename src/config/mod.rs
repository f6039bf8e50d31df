pub mod settings;

pub use settings::{CacheBackend, CacheExpiry, Config};

use crate::error::StatsError;
use std::sync::Arc;
use url::Url;

/// Loads the application configuration once at startup.
///
/// The returned `Arc<Config>` is handed to every component constructor; nothing
/// reads the environment after this point.
pub fn load_config() -> Result<Arc<Config>, StatsError> {
    dotenv::dotenv().ok(); // Load .env file if present, ignore errors
    let config = Config::from_env();
    validate(&config)?;
    Ok(Arc::new(config))
}

pub fn validate(config: &Config) -> Result<(), StatsError> {
    let urls = [
        ("API_URL", &config.api_url),
        ("HISTORICAL_API_URL", &config.historical_api_url),
        ("CONTINENT_API_URL", &config.continent_api_url),
    ];
    for (name, value) in urls {
        if value.is_empty() {
            return Err(StatsError::ConfigError(format!("{} cannot be empty", name)));
        }
        Url::parse(value)
            .map_err(|e| StatsError::ConfigError(format!("{} is not a valid URL: {}", name, e)))?;
    }
    if config.cache_backend == CacheBackend::Redis && config.redis_url.is_empty() {
        return Err(StatsError::ConfigError("REDIS_URL cannot be empty".to_string()));
    }
    if config.http_timeout_secs == 0 {
        return Err(StatsError::ConfigError(
            "HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
