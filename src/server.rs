use axum::{Json, Router, http::StatusCode};
use std::sync::Arc;
use tracing::info;

use crate::api::routes;
use crate::state::PanelState;

/// The panel stats service: owns the shared registry and serves the stats
/// endpoint until the process exits.
pub struct Server {
    state: Arc<PanelState>,
    port: String,
}

impl Server {
    pub fn new(port: Option<String>) -> Self {
        Self {
            state: Arc::new(PanelState::new()),
            port: port.unwrap_or_else(|| "3131".into()),
        }
    }

    /// Handle to the registry, for the embedding application to record
    /// users, connections and channels on.
    pub fn state(&self) -> Arc<PanelState> {
        self.state.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .merge(routes::configure_api_routes(self.state.clone()))
            .fallback(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "error": "NOT_FOUND" })),
                )
            })
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let url = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&url).await?;
        info!(%url, "panel stats service listening");

        axum::serve(listener, app).await?;

        Ok(())
    }
}
