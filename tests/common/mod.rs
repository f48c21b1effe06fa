use chrono::{TimeDelta, Utc};
use std::sync::Arc;

use dashpulse::models::connection::ConnectionData;
use dashpulse::state::PanelState;

/// Seed a panel registry so the dashboard reads 5 / 2 / 1 / 10: five users
/// of whom two are active and unexpired, two tracked connections of which
/// one heartbeat is fresh, and a twelve-channel lineup with ten active
/// channels under the selected source.
pub async fn seed_panel(state: &PanelState) {
    let now = Utc::now();

    state.add_user("alice", true, now + TimeDelta::days(30)).await;
    state.add_user("bob", true, now + TimeDelta::days(7)).await;
    state.add_user("carol", true, now - TimeDelta::days(1)).await;
    state.add_user("dave", false, now + TimeDelta::days(30)).await;
    state
        .add_user("erin", false, now - TimeDelta::days(90))
        .await;

    state
        .register_connection("alice", "127.0.0.1:52110".parse().unwrap())
        .await;

    // A connection whose heartbeat went quiet well past the liveness window.
    let stale_id: Arc<str> = Arc::from("STALE001");
    state.connections.write().await.insert(
        stale_id.clone(),
        ConnectionData {
            id: stale_id,
            username: Arc::from("bob"),
            ip: "127.0.0.1:52111".parse().unwrap(),
            connected_at: now - TimeDelta::hours(2),
            last_heartbeat: now - TimeDelta::minutes(10),
        },
    );

    for n in 0..10 {
        state
            .upsert_channel(&format!("main-{n}"), &format!("Main {n}"), "main", true)
            .await;
    }
    state
        .upsert_channel("main-off", "Main Off", "main", false)
        .await;
    state
        .upsert_channel("backup-0", "Backup 0", "backup", true)
        .await;
    state.select_source(Some("main")).await;
}

pub async fn create_populated_test_state() -> Arc<PanelState> {
    let state = Arc::new(PanelState::new());
    seed_panel(&state).await;
    state
}
