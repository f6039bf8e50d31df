// src/utils/mod.rs
use crate::config::Config;
use log::info;

pub mod timing;

/// Routes `log` records to stdout and, when `LOG_FILE` is set, to that file.
pub fn setup_logging(config: &Config) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.log_level)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("redis", log::LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    info!("Logging initialized.");
    Ok(())
}

/// Redact credentials from a Redis URL for logging
pub fn redact_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let prefix = &url[..=colon_pos];
            let suffix = &url[at_pos..];
            if !prefix.ends_with("://") {
                return format!("{}***{}", prefix, suffix);
            }
        }
    }
    url.to_string()
}
