use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

use crate::state::PanelState;

#[derive(serde::Serialize)]
struct PanelStats {
    total_users: u64,
    active_users: u64,
    active_connections: u64,
    total_channels: u64,
    generated_at: DateTime<Utc>,
}

/// `GET /api/stats`: the snapshot the dashboard refresh loop consumes.
/// Unauthenticated, since the poll request carries no headers.
pub async fn stats_handler(State(state): State<Arc<PanelState>>) -> (StatusCode, Json<Value>) {
    let now = Utc::now();
    let users = state.users.read().await;
    let connections = state.connections.read().await;
    let channels = state.channels.read().await;
    let active_source = state.active_source.read().await;

    let total_users = users.len() as u64;
    let active_users = users.values().filter(|user| user.is_current(now)).count() as u64;
    let active_connections = connections.values().filter(|conn| conn.is_live(now)).count() as u64;
    // Only the selected source's lineup counts; with none selected the
    // dashboard shows zero channels.
    let total_channels = match active_source.as_ref() {
        Some(source) => channels
            .values()
            .filter(|channel| channel.is_active && channel.source == *source)
            .count() as u64,
        None => 0,
    };

    (
        StatusCode::OK,
        Json(serde_json::json!(PanelStats {
            total_users,
            active_users,
            active_connections,
            total_channels,
            generated_at: now,
        })),
    )
}
