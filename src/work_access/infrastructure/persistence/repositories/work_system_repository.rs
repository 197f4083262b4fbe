use async_trait::async_trait;

use crate::work_access::domain::{
    model::{
        entities::work_system::WorkSystem,
        enums::work_access_domain_error::WorkAccessDomainError,
        value_objects::work_system_id::WorkSystemId,
    },
    services::work_access_query_service::WorkSystemSummary,
};

#[async_trait]
pub trait WorkSystemRepository: Send + Sync {
    /// Returns the active system with its active rules, in stable rule
    /// order. Inactive systems resolve to None.
    async fn find_active_system(
        &self,
        work_system_id: &WorkSystemId,
    ) -> Result<Option<WorkSystem>, WorkAccessDomainError>;

    async fn list_active_systems(
        &self,
    ) -> Result<Vec<WorkSystemSummary>, WorkAccessDomainError>;
}
