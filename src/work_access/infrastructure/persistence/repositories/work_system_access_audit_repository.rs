use async_trait::async_trait;

use crate::work_access::domain::model::{
    enums::work_access_domain_error::WorkAccessDomainError,
    events::work_system_access_recorded_event::WorkSystemAccessRecordedEvent,
};

#[async_trait]
pub trait WorkSystemAccessAuditRepository: Send + Sync {
    async fn append_entry(
        &self,
        event: &WorkSystemAccessRecordedEvent,
    ) -> Result<(), WorkAccessDomainError>;
}
