use async_trait::async_trait;

use crate::work_access::domain::model::{
    entities::user_snapshot::UserSnapshot,
    enums::work_access_domain_error::WorkAccessDomainError, value_objects::user_id::UserId,
};

#[async_trait]
pub trait UserDirectoryRepository: Send + Sync {
    /// Snapshot of an active staff member; inactive or unknown users
    /// resolve to None.
    async fn find_snapshot(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserSnapshot>, WorkAccessDomainError>;
}
