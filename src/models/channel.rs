use std::sync::Arc;

#[derive(Clone)]
pub struct ChannelData {
    pub name: String,
    pub source: Arc<str>,
    pub is_active: bool,
}
