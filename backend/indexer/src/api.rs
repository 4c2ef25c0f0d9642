//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{EventRecord, Instance};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Query and response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// Only events of this stored type (e.g. `answer_voted`).
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContractEventsQuery {
    /// Only events about this proposal, answer or token id.
    pub subject: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstancesQuery {
    /// `room`, `bounty` or `collection`.
    pub kind: Option<String>,
}

#[derive(Serialize)]
pub struct ContractEventsResponse {
    pub contract_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct InstancesResponse {
    pub count: usize,
    pub instances: Vec<Instance>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn internal_error(e: IndexerError) -> Response {
    tracing::error!("API query failed: {e}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events[?type=…]`
///
/// Returns all indexed events across every watched contract.
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Response {
    match db::get_all_events(&state.pool, query.event_type.as_deref()).await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /contracts/:id/events[?subject=…]`
///
/// Returns the indexed events of one room, bounty, collection or creator.
pub async fn get_contract_events(
    State(state): State<Arc<ApiState>>,
    Path(contract_id): Path<String>,
    Query(query): Query<ContractEventsQuery>,
) -> Response {
    match db::get_events_for_contract(&state.pool, &contract_id, query.subject.as_deref()).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(ContractEventsResponse {
                    contract_id,
                    count,
                    events,
                }),
            )
                .into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /instances[?kind=room|bounty|collection]`
///
/// Lists instances announced by the watched creators.
pub async fn get_instances(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<InstancesQuery>,
) -> Response {
    if let Some(kind) = query.kind.as_deref() {
        if !matches!(kind, "room" | "bounty" | "collection") {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("unknown instance kind: {kind}"),
            );
        }
    }

    match db::get_instances(&state.pool, query.kind.as_deref()).await {
        Ok(instances) => {
            let count = instances.len();
            (StatusCode::OK, Json(InstancesResponse { count, instances })).into_response()
        }
        Err(e) => internal_error(e),
    }
}
