use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapter::CookieAdapter;
use crate::api::extract::ApiJson;
use crate::api::AppState;
use crate::errors::BridgeError;
use crate::models::CookieRecord;

pub async fn list(State(state): State<AppState>) -> Json<Vec<CookieRecord>> {
    let cookies = state
        .platform
        .cookie_jar()
        .iter()
        .map(|cookie| CookieRecord::from_view(cookie.as_ref()))
        .collect();
    Json(cookies)
}

pub async fn update(
    State(state): State<AppState>,
    ApiJson(cookie): ApiJson<CookieRecord>,
) -> Result<(StatusCode, Json<CookieRecord>), BridgeError> {
    state
        .platform
        .update_cookie_jar(Box::new(CookieAdapter::new(cookie.clone())));
    Ok((StatusCode::CREATED, Json(cookie)))
}
