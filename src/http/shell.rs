//! History-mode shell.
//!
//! # Responsibilities
//! - Serve the SPA document for every path the route table can render
//! - Turn redirect routes into HTTP redirects
//! - Answer unmatched paths with 404 (or the configured fallback redirect)
//!
//! # Design Decisions
//! - The shell document is read once at startup
//! - `x-navigator-view` tells the caller which view the path resolved to

use std::path::Path;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::config::{NotFoundPolicy, ShellConfig};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Resolution;

pub const X_NAVIGATOR_VIEW: HeaderName = HeaderName::from_static("x-navigator-view");

/// The HTML document served for renderable routes.
#[derive(Debug, Clone)]
pub struct ShellDocument {
    html: String,
}

impl ShellDocument {
    /// Load the configured index file, or build the placeholder page.
    pub fn load(config: &ShellConfig) -> std::io::Result<Self> {
        match &config.index_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::placeholder(&config.title)),
        }
    }

    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        Ok(Self {
            html: std::fs::read_to_string(path)?,
        })
    }

    pub fn placeholder(title: &str) -> Self {
        Self {
            html: format!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
                 <title>{title}</title>\n</head>\n<body>\n<div id=\"app\"></div>\n</body>\n</html>\n"
            ),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Fallback handler: every path outside `/_nav` lands here.
pub async fn serve_shell(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let start = Instant::now();
    let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let resolution = state.table.resolve(target);
    metrics::record_navigation(resolution.outcome(), start);

    match resolution {
        Resolution::Matched(route) => {
            tracing::debug!(path = %route.path, view = %route.view, "Serving shell");
            (
                [(X_NAVIGATOR_VIEW, route.view.as_str())],
                Html(state.shell.html().to_owned()),
            )
                .into_response()
        }
        Resolution::Redirect(instruction) => {
            tracing::debug!(from = %instruction.from, to = %instruction.to, "Redirecting");
            Redirect::temporary(&instruction.to).into_response()
        }
        Resolution::NotFound { path } => match state.table.not_found_policy() {
            NotFoundPolicy::Redirect { to } => {
                tracing::debug!(path = %path, to = %to, "Unmatched path, redirecting to fallback");
                Redirect::temporary(to).into_response()
            }
            NotFoundPolicy::Report => {
                tracing::debug!(path = %path, "Unmatched path");
                (StatusCode::NOT_FOUND, Html(state.shell.html().to_owned())).into_response()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_mount_point() {
        let doc = ShellDocument::placeholder("Quiz Master");
        assert!(doc.html().contains("<title>Quiz Master</title>"));
        assert!(doc.html().contains("id=\"app\""));
    }

    #[test]
    fn test_missing_index_file() {
        let config = ShellConfig {
            index_file: Some("/definitely/not/index.html".into()),
            ..ShellConfig::default()
        };
        assert!(ShellDocument::load(&config).is_err());
    }
}
