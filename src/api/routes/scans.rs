use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::api::extract::ApiJson;
use crate::api::models::ScanMessage;
use crate::api::AppState;
use crate::codec;
use crate::errors::BridgeError;
use crate::platform::ServiceDescriptor;
use crate::registry::JobSnapshot;

pub async fn submit(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<ScanMessage>,
) -> Result<(StatusCode, Json<Value>), BridgeError> {
    let request = codec::decode(&message.request)
        .map_err(|e| BridgeError::validation("request", e))?;
    let target = ServiceDescriptor::from_flags(&message.host, message.port, message.use_https);
    let handle = state.platform.start_active_scan(&target, &request);
    let id = state.jobs.insert(handle);
    info!(id, host = %target.host, port = target.port, "active scan submitted");
    Ok((StatusCode::CREATED, Json(json!({"id": id}))))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<JobSnapshot>> {
    Json(state.jobs.list())
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobSnapshot>, BridgeError> {
    let id = parse_id(&id)?;
    state
        .jobs
        .snapshot(id)
        .map(Json)
        .ok_or_else(|| BridgeError::not_found("id", "scan item not found"))
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, BridgeError> {
    let id = parse_id(&id)?;
    if state.jobs.cancel(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BridgeError::not_found("id", "scan item not found"))
    }
}

pub async fn passive(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<ScanMessage>,
) -> Result<StatusCode, BridgeError> {
    let request = codec::decode(&message.request)
        .map_err(|e| BridgeError::validation("request", e))?;
    let response_text = message
        .response
        .as_deref()
        .ok_or_else(|| BridgeError::validation("response", "response is required"))?;
    let response = codec::decode(response_text)
        .map_err(|e| BridgeError::validation("response", e))?;
    let target = ServiceDescriptor::from_flags(&message.host, message.port, message.use_https);
    state.platform.passive_scan(&target, &request, &response);
    Ok(StatusCode::CREATED)
}

fn parse_id(segment: &str) -> Result<u32, BridgeError> {
    segment
        .parse::<u32>()
        .map_err(|e| BridgeError::validation("id", e))
}
