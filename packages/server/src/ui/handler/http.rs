//! HTTP API endpoint handlers.
//!
//! Error bodies are plain strings, or arrays of strings for validation
//! failures, matching what the frontend expects. Store failures surface as
//! 500 with the underlying message; this service is not meant to face an
//! untrusted network.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ParticipantName, RepositoryError};
use crate::infrastructure::dto::http::{MessageDto, ParticipantDto};
use crate::ui::state::AppState;
use crate::ui::validation;
use crate::usecase::{HeartbeatError, PostMessageError, RegisterError};

/// Query parameters for message listing
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    limit: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Register a participant (POST /participants)
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Response {
    let name = match validation::validate_registration(&payload) {
        Ok(name) => name,
        Err(errors) => return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    };

    match state.register_participant_usecase.execute(name).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e @ RegisterError::NameTaken(_)) => {
            (StatusCode::CONFLICT, e.to_string()).into_response()
        }
        Err(RegisterError::Store(e)) => store_error(e),
    }
}

/// List every participant record (GET /participants)
pub async fn get_participants(State(state): State<Arc<AppState>>) -> Response {
    match state.list_participants_usecase.execute().await {
        Ok(participants) => {
            let records: Vec<ParticipantDto> = participants.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => store_error(e),
    }
}

/// Post a public or private message (POST /messages)
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    // Body validation first; failures short-circuit with the error list
    let validated = match validation::validate_message(&payload) {
        Ok(validated) => validated,
        Err(errors) => return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    };

    // A missing claimed identity can never name a registered participant
    let from = match claimed_identity(&headers) {
        Some(name) => name,
        None => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                "sender is not registered".to_string(),
            )
                .into_response();
        }
    };

    match state
        .post_message_usecase
        .execute(from, validated.to, validated.text, validated.kind)
        .await
    {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e @ PostMessageError::UnknownSender(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Err(PostMessageError::Store(e)) => store_error(e),
    }
}

/// List messages visible to the caller (GET /messages)
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListMessagesQuery>,
) -> Response {
    let limit = match parse_limit(query.limit.as_deref()) {
        Some(limit) => limit,
        None => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                "limit must be a positive integer".to_string(),
            )
                .into_response();
        }
    };

    let viewer = claimed_identity(&headers);
    match state
        .list_messages_usecase
        .execute(viewer.as_ref(), limit)
        .await
    {
        Ok(messages) => {
            let records: Vec<MessageDto> = messages.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => store_error(e),
    }
}

/// Refresh the caller's liveness timestamp (POST /status)
pub async fn heartbeat(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let name = match claimed_identity(&headers) {
        Some(name) => name,
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    match state.heartbeat_usecase.execute(name).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e @ HeartbeatError::UnknownParticipant(_)) => {
            (StatusCode::CONFLICT, e.to_string()).into_response()
        }
        Err(HeartbeatError::Store(e)) => store_error(e),
    }
}

/// Read the claimed identity from the per-request `user` header.
///
/// The value is an unauthenticated claim: no credential backs it, and it is
/// threaded through explicitly rather than held as ambient state.
fn claimed_identity(headers: &HeaderMap) -> Option<ParticipantName> {
    let raw = headers.get("user")?.to_str().ok()?;
    ParticipantName::new(raw.to_string()).ok()
}

/// Parse the required `limit` query value: a positive integer
fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let parsed: i64 = raw?.parse().ok()?;
    if parsed <= 0 {
        return None;
    }
    Some(parsed as usize)
}

fn store_error(e: RepositoryError) -> Response {
    tracing::error!("Store operation failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}
