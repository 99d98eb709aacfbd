//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Compile the route table and surface every table problem
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavigatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::NavigatorConfig;
use crate::routing::{RouteError, RouteTable};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("navigation.max_redirects must be greater than zero")]
    ZeroMaxRedirects,

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &NavigatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.navigation.max_redirects == 0 {
        errors.push(ValidationError::ZeroMaxRedirects);
    }

    if let Err(table_error) = RouteTable::from_config(config) {
        errors.extend(table_error.errors.into_iter().map(ValidationError::Route));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotFoundPolicy;
    use crate::routing::RouteDefinition;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&NavigatorConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = NavigatorConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.navigation.max_redirects = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();
        config.routes.push(RouteDefinition::view("/login", "Duplicate"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
        assert!(errors.contains(&ValidationError::ZeroMaxRedirects));
        assert!(errors.contains(&ValidationError::Route(RouteError::DuplicatePath {
            path: "/login".into()
        })));
    }

    #[test]
    fn test_fallback_must_fit_redirect_limit() {
        let mut config = NavigatorConfig::default();
        config.navigation.max_redirects = 1;
        config.navigation.not_found = NotFoundPolicy::Redirect { to: "/".into() };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::Route(RouteError::FallbackTooLong {
                to: "/".into(),
                hops: 2,
                limit: 1
            })])
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = NavigatorConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = NavigatorConfig::default();
        config.observability.log_level = "quiz_navigator=loud".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidLogLevel(
                "quiz_navigator=loud".into()
            )])
        );
    }
}
