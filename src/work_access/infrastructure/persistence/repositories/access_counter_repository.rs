use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::work_access::domain::model::{
    enums::work_access_domain_error::WorkAccessDomainError,
    value_objects::{user_id::UserId, work_system_id::WorkSystemId},
};

#[derive(Clone, Debug)]
pub struct AccessCounterRecord {
    pub access_count: i64,
    pub last_accessed_at: DateTime<Utc>,
}

#[async_trait]
pub trait AccessCounterRepository: Send + Sync {
    /// Creates the (user, system) counter at 1 or increments it in place.
    /// Must be a single atomic statement at the storage layer; concurrent
    /// grants for the same pair must not lose updates.
    async fn increment_access(
        &self,
        user_id: &UserId,
        work_system_id: &WorkSystemId,
    ) -> Result<AccessCounterRecord, WorkAccessDomainError>;
}
