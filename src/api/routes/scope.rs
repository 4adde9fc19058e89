use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use url::Url;

use crate::api::extract::ApiJson;
use crate::api::models::UrlMessage;
use crate::api::routes::url_from_segment;
use crate::api::AppState;
use crate::errors::BridgeError;

pub async fn check(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<(StatusCode, Json<Value>), BridgeError> {
    let url = url_from_segment(&url)?;
    if state.platform.is_in_scope(&url) {
        Ok((StatusCode::OK, Json(json!({"is_in_scope": true}))))
    } else {
        Ok((StatusCode::NOT_FOUND, Json(json!({"is_in_scope": false}))))
    }
}

pub async fn include(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<UrlMessage>,
) -> Result<(StatusCode, Json<UrlMessage>), BridgeError> {
    let url = Url::parse(&message.url).map_err(|e| BridgeError::validation("url", e))?;
    state.platform.include_in_scope(&url);
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn exclude(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<StatusCode, BridgeError> {
    let url = url_from_segment(&url)?;
    state.platform.exclude_from_scope(&url);
    Ok(StatusCode::NO_CONTENT)
}
