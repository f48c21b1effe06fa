use chrono::{DateTime, Utc};
use std::{collections::HashMap, net::SocketAddr, sync::Arc};
use tokio::sync::RwLock;

use crate::models::{channel::ChannelData, connection::ConnectionData, user::UserData};
use crate::utils::id_generator::connection_id;

pub type Users = Arc<RwLock<HashMap<Arc<str>, UserData>>>;
pub type Connections = Arc<RwLock<HashMap<Arc<str>, ConnectionData>>>;
pub type Channels = Arc<RwLock<HashMap<Arc<str>, ChannelData>>>;

/// Registry behind the stats endpoint: subscribers, their live connections,
/// and the channel lineup of the selected source.
pub struct PanelState {
    pub users: Users,
    pub connections: Connections,
    pub channels: Channels,
    pub active_source: RwLock<Option<Arc<str>>>,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            connections: Arc::new(RwLock::new(HashMap::new())),
            channels: Arc::new(RwLock::new(HashMap::new())),
            active_source: RwLock::new(None),
        }
    }

    pub async fn add_user(&self, username: &str, is_active: bool, expiry: DateTime<Utc>) {
        let username: Arc<str> = Arc::from(username);
        self.users.write().await.insert(
            username.clone(),
            UserData {
                username,
                is_active,
                expiry,
            },
        );
    }

    pub async fn deactivate_user(&self, username: &str) -> bool {
        match self.users.write().await.get_mut(username) {
            Some(user) => {
                user.is_active = false;
                true
            }
            None => false,
        }
    }

    /// Track a new connection and hand back its generated id. The first
    /// heartbeat is the registration itself.
    pub async fn register_connection(&self, username: &str, ip: SocketAddr) -> Arc<str> {
        let id = connection_id();
        let now = Utc::now();
        self.connections.write().await.insert(
            id.clone(),
            ConnectionData {
                id: id.clone(),
                username: Arc::from(username),
                ip,
                connected_at: now,
                last_heartbeat: now,
            },
        );
        id
    }

    pub async fn heartbeat(&self, id: &str) -> bool {
        match self.connections.write().await.get_mut(id) {
            Some(conn) => {
                conn.last_heartbeat = Utc::now();
                true
            }
            None => false,
        }
    }

    pub async fn drop_connection(&self, id: &str) -> bool {
        self.connections.write().await.remove(id).is_some()
    }

    pub async fn upsert_channel(&self, channel_id: &str, name: &str, source: &str, is_active: bool) {
        self.channels.write().await.insert(
            Arc::from(channel_id),
            ChannelData {
                name: name.to_string(),
                source: Arc::from(source),
                is_active,
            },
        );
    }

    /// Select which source's lineup counts toward the channel total, or
    /// clear the selection entirely.
    pub async fn select_source(&self, source: Option<&str>) {
        *self.active_source.write().await = source.map(Arc::from);
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
