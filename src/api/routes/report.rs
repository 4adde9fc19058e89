use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::routes::url_from_segment;
use crate::api::AppState;
use crate::errors::BridgeError;

const REPORT_FORMAT: &str = "HTML";

/// The platform writes the report into a temp file; the bytes are forwarded
/// verbatim as a download. The staging file is removed when it drops.
pub async fn generate(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Response, BridgeError> {
    let url = url_from_segment(&url)?;
    let issues = state.platform.scan_issues(Some(&url));

    let file = tempfile::Builder::new()
        .prefix("scan-report-")
        .tempfile()?;
    state
        .platform
        .generate_scan_report(REPORT_FORMAT, &issues, file.path())?;
    let bytes = tokio::fs::read(file.path()).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=ScanReport.HTML",
        ),
    ];
    Ok((headers, bytes).into_response())
}
