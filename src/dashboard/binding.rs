use std::sync::{Arc, Mutex};

use crate::models::snapshot::StatsSnapshot;

/// Accent styles of the dashboard summary cards. Each snapshot field maps to
/// one accent: total users on the primary card, active users on success,
/// active connections on warning, channel total on info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAccent {
    Primary,
    Success,
    Warning,
    Info,
}

/// Shared handle to one card's visible numeric text. Writes overwrite the
/// whole text, so concurrent writers settle on whichever lands last.
#[derive(Clone, Default)]
pub struct StatCard {
    text: Arc<Mutex<String>>,
}

impl StatCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&self, value: impl Into<String>) {
        *self.text.lock().expect("card text lock poisoned") = value.into();
    }

    pub fn text(&self) -> String {
        self.text.lock().expect("card text lock poisoned").clone()
    }
}

/// The cards resolved for a single poll. A `None` slot means the page does
/// not currently show that card; the slot is skipped, never an error.
#[derive(Default)]
pub struct DisplayBinding {
    pub total_users: Option<StatCard>,
    pub active_users: Option<StatCard>,
    pub active_connections: Option<StatCard>,
    pub total_channels: Option<StatCard>,
}

impl DisplayBinding {
    /// Write the snapshot into every bound card. A field the endpoint
    /// omitted blanks its card.
    pub fn apply(&self, snapshot: &StatsSnapshot) {
        write_slot(&self.total_users, snapshot.total_users);
        write_slot(&self.active_users, snapshot.active_users);
        write_slot(&self.active_connections, snapshot.active_connections);
        write_slot(&self.total_channels, snapshot.total_channels);
    }
}

fn write_slot(slot: &Option<StatCard>, value: Option<u64>) {
    if let Some(card) = slot {
        match value {
            Some(v) => card.set_text(v.to_string()),
            None => card.set_text(String::new()),
        }
    }
}

/// Card lookup for the refresh loop. Resolved fresh on every poll, so a
/// surface that swaps cards in or out between ticks is picked up without
/// any caching or invalidation.
pub trait ResolveBindings: Send + Sync {
    fn resolve_bindings(&self) -> DisplayBinding;
}
