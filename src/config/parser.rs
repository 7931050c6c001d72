use crate::config::types::Config;
use crate::{ConfigError, ConfigResult};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitegrade::config::load_config;
///
/// let config = load_config(Path::new("sitegrade.toml")).unwrap();
/// println!("Probe concurrency: {}", config.audit.probe_concurrency);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Validates a parsed configuration
fn validate(config: &Config) -> ConfigResult<()> {
    if config.audit.probe_concurrency == 0 {
        return Err(ConfigError::Validation(
            "audit.probe-concurrency must be at least 1".to_string(),
        ));
    }

    if let Some(0) = config.client.request_timeout_secs {
        return Err(ConfigError::Validation(
            "client.request-timeout-secs must be at least 1 when set".to_string(),
        ));
    }

    if let Some(agent) = &config.client.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "client.user-agent must not be blank when set".to_string(),
            ));
        }
    }

    Ok(())
}
