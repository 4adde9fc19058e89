use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use url::Url;

use crate::api::extract::ApiJson;
use crate::api::models::{ScanMessage, UrlMessage};
use crate::api::AppState;
use crate::codec;
use crate::errors::BridgeError;
use crate::platform::ServiceDescriptor;

const REPEATER_TAB: &str = "scanbridge";

pub async fn to_tool(
    State(state): State<AppState>,
    Path(tool): Path<String>,
    ApiJson(message): ApiJson<ScanMessage>,
) -> Result<StatusCode, BridgeError> {
    let request = codec::decode(&message.request)
        .map_err(|e| BridgeError::validation("request", e))?;
    let target = ServiceDescriptor::from_flags(&message.host, message.port, message.use_https);
    match tool.as_str() {
        "intruder" => state.platform.send_to_intruder(&target, &request),
        "repeater" => state.platform.send_to_repeater(&target, &request, REPEATER_TAB),
        _ => return Err(BridgeError::not_found("tool", "tool not found")),
    }
    Ok(StatusCode::OK)
}

pub async fn spider(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<UrlMessage>,
) -> Result<(StatusCode, Json<UrlMessage>), BridgeError> {
    let url = Url::parse(&message.url).map_err(|e| BridgeError::validation("url", e))?;
    state.platform.send_to_spider(&url);
    Ok((StatusCode::CREATED, Json(message)))
}
