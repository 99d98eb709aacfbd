//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any configuration or table error is fatal
//! - Without a config file the built-in quiz table and defaults are used

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, NavigatorConfig};

/// Load the configuration at `path`, or validated defaults when `None`.
pub fn prepare(path: Option<&Path>) -> Result<NavigatorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = NavigatorConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = prepare(None).unwrap();
        assert_eq!(config.routes.len(), 15);
    }
}
