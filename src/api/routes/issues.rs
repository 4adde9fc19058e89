use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapter::IssueAdapter;
use crate::api::extract::ApiJson;
use crate::api::routes::url_from_segment;
use crate::api::AppState;
use crate::errors::BridgeError;
use crate::models::IssueRecord;

pub async fn list_all(State(state): State<AppState>) -> Json<Vec<IssueRecord>> {
    let issues = state
        .platform
        .scan_issues(None)
        .iter()
        .map(|issue| IssueRecord::from_view(issue.as_ref()))
        .collect();
    Json(issues)
}

pub async fn list_for_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<Vec<IssueRecord>>, BridgeError> {
    let url = url_from_segment(&url)?;
    let issues = state
        .platform
        .scan_issues(Some(&url))
        .iter()
        .map(|issue| IssueRecord::from_view(issue.as_ref()))
        .collect();
    Ok(Json(issues))
}

pub async fn submit(
    State(state): State<AppState>,
    ApiJson(issue): ApiJson<IssueRecord>,
) -> Result<(StatusCode, Json<IssueRecord>), BridgeError> {
    state
        .platform
        .add_scan_issue(Box::new(IssueAdapter::new(issue.clone())));
    Ok((StatusCode::CREATED, Json(issue)))
}
