use serde::Deserialize;

/// One dashboard refresh payload as received from the stats endpoint.
///
/// Every field is optional at the wire level: a field the endpoint omits
/// stays `None` and is rendered as empty card text. Unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatsSnapshot {
    pub total_users: Option<u64>,
    pub active_users: Option<u64>,
    pub active_connections: Option<u64>,
    pub total_channels: Option<u64>,
}
