use async_trait::async_trait;
use uuid::Uuid;

use crate::work_access::domain::{
    model::{
        enums::work_access_domain_error::WorkAccessDomainError,
        queries::{
            check_work_system_access_query::CheckWorkSystemAccessQuery,
            list_work_systems_query::ListWorkSystemsQuery,
        },
    },
    services::access_evaluator::AccessDecision,
};

/// The target URL is populated only when the decision allows access; a
/// denied caller must not learn where the system lives.
#[derive(Clone, Debug)]
pub struct WorkSystemAccessView {
    pub id: Uuid,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AccessCheckResult {
    pub decision: AccessDecision,
    pub system: WorkSystemAccessView,
}

#[derive(Clone, Debug)]
pub struct WorkSystemSummary {
    pub id: Uuid,
    pub name: String,
    pub display_order: i32,
}

#[async_trait]
pub trait WorkAccessQueryService: Send + Sync {
    async fn handle_check_access(
        &self,
        query: CheckWorkSystemAccessQuery,
    ) -> Result<AccessCheckResult, WorkAccessDomainError>;

    async fn handle_list_work_systems(
        &self,
        query: ListWorkSystemsQuery,
    ) -> Result<Vec<WorkSystemSummary>, WorkAccessDomainError>;
}
