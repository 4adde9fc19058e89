use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::routes::message_pair_json;
use crate::api::AppState;
use crate::errors::BridgeError;

pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<Value>>, BridgeError> {
    let entries = state
        .platform
        .proxy_history()
        .iter()
        .map(|pair| message_pair_json(pair.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(entries))
}

pub async fn enable_intercept(State(state): State<AppState>) -> StatusCode {
    state.platform.set_proxy_interception(true);
    StatusCode::OK
}

pub async fn disable_intercept(State(state): State<AppState>) -> StatusCode {
    state.platform.set_proxy_interception(false);
    StatusCode::OK
}
