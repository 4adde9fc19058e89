use axum::extract::State;
use axum::http::StatusCode;

use crate::api::extract::ApiJson;
use crate::api::models::AlertMessage;
use crate::api::AppState;
use crate::errors::BridgeError;

pub async fn raise(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<AlertMessage>,
) -> Result<StatusCode, BridgeError> {
    state.platform.issue_alert(&message.message);
    Ok(StatusCode::CREATED)
}
