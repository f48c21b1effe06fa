use axum::{Router, routing::get};
use std::sync::Arc;

use super::handlers;
use crate::state::PanelState;

pub fn configure_api_routes(state: Arc<PanelState>) -> Router {
    Router::new()
        .route("/api/stats", get(handlers::stats_handler))
        .with_state(state)
}
