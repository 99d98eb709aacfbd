//! Configuration schema definitions.
//!
//! Every section has defaults, so an empty file yields the quiz route table
//! served on a local port.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::routing::catalog::quiz_routes;
use crate::routing::RouteDefinition;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Listener configuration for the shell server.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,

    /// Resolution behavior.
    pub navigation: NavigationConfig,

    /// Document served for renderable routes.
    pub shell: ShellConfig,

    /// Route table. Replaces the built-in quiz table when present.
    pub routes: Vec<RouteDefinition>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            navigation: NavigationConfig::default(),
            shell: ShellConfig::default(),
            routes: quiz_routes(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive). `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// How a trailing slash on an incoming path is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// `/login/` and `/login` are different paths.
    #[default]
    Strict,
    /// Trailing slashes are dropped before matching.
    Lenient,
}

/// What navigation does with a path no route matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Report `NotFound` to the host shell.
    #[default]
    Report,
    /// Redirect to a fallback path, which must lead to a view.
    Redirect { to: String },
}

/// Resolution behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub trailing_slash: TrailingSlash,

    /// Maximum redirects followed by a single navigation.
    pub max_redirects: usize,

    pub not_found: NotFoundPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            trailing_slash: TrailingSlash::Strict,
            max_redirects: 8,
            not_found: NotFoundPolicy::Report,
        }
    }
}

/// Shell document configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// HTML file served for renderable routes (typically the SPA's
    /// `index.html`). A minimal built-in page is used when unset.
    pub index_file: Option<PathBuf>,

    /// Title of the built-in page.
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            index_file: None,
            title: "Quiz Master".to_string(),
        }
    }
}
