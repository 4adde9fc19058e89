use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::{build_router, AppState};
use crate::errors::BridgeError;
use crate::platform::Platform;

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// When set, every registered scan job is cancelled as the listener
    /// shuts down instead of being left running on the platform.
    #[serde(default)]
    pub cancel_jobs_on_shutdown: bool,
}

fn default_bind() -> SocketAddr {
    ([127, 0, 0, 1], 8001).into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            bind: default_bind(),
            cancel_jobs_on_shutdown: false,
        }
    }
}

/// Serves the gateway until the process ends. The platform is supplied by
/// the embedding process; the gateway never constructs one.
pub async fn serve(config: GatewayConfig, platform: Arc<dyn Platform>) -> Result<(), BridgeError> {
    serve_with_shutdown(config, platform, CancellationToken::new()).await
}

/// Serves the gateway until `shutdown` is cancelled, then drains gracefully.
pub async fn serve_with_shutdown(
    config: GatewayConfig,
    platform: Arc<dyn Platform>,
    shutdown: CancellationToken,
) -> Result<(), BridgeError> {
    let state = AppState::new(platform);
    let jobs = state.jobs.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "gateway listening");

    let token = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await
        .map_err(|e| BridgeError::Internal(format!("Server error: {}", e)))?;

    if config.cancel_jobs_on_shutdown {
        info!(jobs = jobs.len(), "cancelling registered scan jobs at shutdown");
        jobs.cancel_all();
    }
    Ok(())
}
