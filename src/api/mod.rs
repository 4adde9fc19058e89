pub mod errors;
pub mod extract;
pub mod guard;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::platform::Platform;
use crate::registry::JobRegistry;

#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<dyn Platform>,
    pub jobs: Arc<JobRegistry>,
}

impl AppState {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        AppState {
            platform,
            jobs: Arc::new(JobRegistry::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", axum::routing::get(routes::ping))
        .route("/scope", axum::routing::post(routes::scope::include))
        .route(
            "/scope/{url}",
            axum::routing::get(routes::scope::check).delete(routes::scope::exclude),
        )
        .route(
            "/scanissues",
            axum::routing::get(routes::issues::list_all).post(routes::issues::submit),
        )
        .route("/scanissues/{url}", axum::routing::get(routes::issues::list_for_url))
        .route("/scanreport/{url}", axum::routing::get(routes::report::generate))
        .route(
            "/scan/active",
            axum::routing::post(routes::scans::submit).get(routes::scans::list),
        )
        .route(
            "/scan/active/{id}",
            axum::routing::get(routes::scans::get).delete(routes::scans::cancel),
        )
        .route("/scan/passive", axum::routing::post(routes::scans::passive))
        .route("/send/{tool}", axum::routing::post(routes::send::to_tool))
        .route("/spider", axum::routing::post(routes::send::spider))
        .route("/alert", axum::routing::post(routes::alert::raise))
        .route(
            "/jar",
            axum::routing::get(routes::jar::list).post(routes::jar::update),
        )
        .route(
            "/sitemap",
            axum::routing::get(routes::sitemap::list_all).post(routes::sitemap::add),
        )
        .route("/sitemap/{url}", axum::routing::get(routes::sitemap::list_for_url))
        .route("/proxyhistory", axum::routing::get(routes::proxy::history))
        .route(
            "/proxy/intercept/enable",
            axum::routing::post(routes::proxy::enable_intercept),
        )
        .route(
            "/proxy/intercept/disable",
            axum::routing::post(routes::proxy::disable_intercept),
        )
        .layer(middleware::from_fn(guard::enforce))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
