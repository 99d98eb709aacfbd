//! `/_nav` inspection endpoints.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RouteDefinition;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub routes: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub path: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        routes: state.table.len(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<RouteDefinition>> {
    Json(state.table.routes().cloned().collect())
}

/// Navigate to `?path=` and report where it lands, following redirects.
pub async fn get_resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Response {
    let start = Instant::now();
    match state.table.navigate(&params.path) {
        Ok(navigation) => {
            metrics::record_navigation(navigation.outcome(), start);
            let status = if navigation.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(navigation)).into_response()
        }
        Err(e) => {
            metrics::record_navigation("error", start);
            tracing::warn!(path = %params.path, error = %e, "Navigation failed");
            (
                StatusCode::LOOP_DETECTED,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
