use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserData {
    pub username: Arc<str>,
    pub is_active: bool,
    pub expiry: DateTime<Utc>,
}

impl UserData {
    /// A user counts toward the active total while enabled and unexpired.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expiry > now
    }
}
