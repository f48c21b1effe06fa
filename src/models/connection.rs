use chrono::{DateTime, TimeDelta, Utc};
use std::{net::SocketAddr, sync::Arc};

/// A connection with no heartbeat inside this window is considered gone.
pub const HEARTBEAT_WINDOW_SECS: i64 = 120;

#[derive(Clone)]
pub struct ConnectionData {
    pub id: Arc<str>,
    pub username: Arc<str>,
    pub ip: SocketAddr,
    pub connected_at: DateTime<Utc>,
    pub last_heartbeat: DateTime<Utc>,
}

impl ConnectionData {
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now - self.last_heartbeat < TimeDelta::seconds(HEARTBEAT_WINDOW_SECS)
    }
}
