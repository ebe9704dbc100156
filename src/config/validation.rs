use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

use super::schema::Config;

/// Validate service configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push("server.host: must not be empty".to_string());
    }

    if let Some(ref timeout) = config.server.request_timeout {
        if let Err(e) = parse_timeout(timeout) {
            errors.push(format!(
                "server.request_timeout: invalid '{}' - {}",
                timeout, e
            ));
        }
    }

    if Level::from_str(&config.log.level).is_err() {
        errors.push(format!(
            "log.level: invalid '{}' - expected trace, debug, info, warn or error",
            config.log.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse a humantime duration such as "30s"; zero is rejected
pub fn parse_timeout(s: &str) -> anyhow::Result<Duration> {
    let duration = humantime::parse_duration(s.trim())?;
    if duration.is_zero() {
        anyhow::bail!("timeout must be greater than zero");
    }
    Ok(duration)
}
