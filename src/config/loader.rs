//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::NavigatorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<NavigatorConfig, ConfigError> {
    let config: NavigatorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<NavigatorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogFormat, NotFoundPolicy, TrailingSlash};
    use crate::routing::RouteError;

    #[test]
    fn test_empty_file_uses_quiz_table() {
        let config = parse_config("").unwrap();
        assert_eq!(config.routes.len(), 15);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "0.0.0.0:3000"

            [observability]
            log_level = "debug"
            log_format = "json"

            [navigation]
            trailing_slash = "lenient"
            max_redirects = 3

            [navigation.not_found]
            policy = "redirect"
            to = "/login"

            [[routes]]
            path = "/"
            redirect = "/login"

            [[routes]]
            name = "login"
            path = "/login"
            view = "Login"

            [[routes]]
            path = "/user/attempt/:quiz_id"
            view = "UserAttemptQuiz"
            props = true
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.navigation.trailing_slash, TrailingSlash::Lenient);
        assert_eq!(config.navigation.max_redirects, 3);
        assert_eq!(
            config.navigation.not_found,
            NotFoundPolicy::Redirect { to: "/login".into() }
        );
        assert_eq!(config.routes.len(), 3);
        assert!(config.routes[2].forward_params_as_props);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[listener\nbind_address = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error_surfaces_route_problems() {
        let err = parse_config(
            r#"
            [[routes]]
            path = "/login"
            view = "Login"
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::Route(RouteError::MissingRoot)]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
