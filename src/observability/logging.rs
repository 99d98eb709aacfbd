//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development

use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{LogFormat, ObservabilityConfig};

/// Build the filter directive from config.
///
/// A bare level (`debug`) is scoped to this crate's binaries and the HTTP
/// trace layer; a directive that already names targets is used as-is.
pub fn filter_directive(config: &ObservabilityConfig) -> String {
    let level = config.log_level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("quiz_navigator={level},nav_cli={level},tower_http={level}")
    }
}

/// Install the global subscriber writing to stdout. `RUST_LOG` takes
/// precedence over config.
///
/// A second call is a no-op, since only one global subscriber can exist.
pub fn init_logging(config: &ObservabilityConfig) {
    install(config, std::io::stdout);
}

/// Same as [`init_logging`] but writes to stderr, keeping stdout free for
/// command output.
pub fn init_stderr_logging(config: &ObservabilityConfig) {
    install(config, std::io::stderr);
}

fn install<W>(config: &ObservabilityConfig, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
