//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/_nav` endpoints and the shell fallback
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and shut down gracefully

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::NavigatorConfig;
use crate::http::handlers::{get_resolve, get_routes, get_status};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::shell::{serve_shell, ShellDocument};
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::ShutdownListener;
use crate::routing::{RouteTable, TableError};

/// Errors building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to read shell document '{}': {source}", .path.display())]
    Shell {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub shell: Arc<ShellDocument>,
}

/// History-mode shell server.
pub struct HttpServer {
    router: Router,
    config: NavigatorConfig,
    table: Arc<RouteTable>,
}

impl HttpServer {
    /// Compile the route table and load the shell document.
    pub fn new(config: NavigatorConfig) -> Result<Self, ServerError> {
        let table = Arc::new(RouteTable::from_config(&config)?);
        let shell = ShellDocument::load(&config.shell).map_err(|source| ServerError::Shell {
            path: config.shell.index_file.clone().unwrap_or_default(),
            source,
        })?;

        let state = AppState {
            table: table.clone(),
            shell: Arc::new(shell),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            table,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &NavigatorConfig, state: AppState) -> Router {
        Router::new()
            .route("/_nav/health", get(get_status))
            .route("/_nav/routes", get(get_routes))
            .route("/_nav/resolve", get(get_resolve))
            .fallback(serve_shell)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(propagate_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(
                        |request: &Request<Body>| {
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request.request_id(),
                            )
                        },
                    ))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until Ctrl+C or a stop is requested.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.table.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The axum router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }
}
