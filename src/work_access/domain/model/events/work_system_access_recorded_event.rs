use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const ACCESS_SYSTEM_ACTION: &str = "access_system";

/// Append-only audit record emitted after a successful grant.
#[derive(Clone, Debug)]
pub struct WorkSystemAccessRecordedEvent {
    pub user_id: Uuid,
    pub action: &'static str,
    pub resource_id: Uuid,
    pub details: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
