use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::adapter::MessageAdapter;
use crate::api::extract::ApiJson;
use crate::api::models::SiteMapMessage;
use crate::api::routes::{message_pair_json, url_from_segment};
use crate::api::AppState;
use crate::errors::BridgeError;
use crate::models::MessageRecord;
use crate::platform::ServiceDescriptor;

pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Value>>, BridgeError> {
    let entries = state
        .platform
        .site_map(None)
        .iter()
        .map(|pair| message_pair_json(pair.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(entries))
}

pub async fn list_for_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<Vec<Value>>, BridgeError> {
    let url = url_from_segment(&url)?;
    let entries = state
        .platform
        .site_map(Some(&url))
        .iter()
        .map(|pair| message_pair_json(pair.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(entries))
}

pub async fn add(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<SiteMapMessage>,
) -> Result<(StatusCode, Json<SiteMapMessage>), BridgeError> {
    let mut record = MessageRecord::from_raw(&message.request, message.response.as_deref());
    record.comment = message.comment.clone();
    record.highlight = message.highlight.clone();
    let service = Arc::new(Mutex::new(ServiceDescriptor::new(
        &message.host,
        message.port,
        &message.protocol,
    )));
    state
        .platform
        .add_to_site_map(Box::new(MessageAdapter::new(record, service)));
    Ok((StatusCode::CREATED, Json(message)))
}
