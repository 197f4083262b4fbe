use std::sync::Arc;

use async_trait::async_trait;

use crate::work_access::{
    application::access_evaluation::evaluate_current_access,
    domain::{
        model::{
            enums::work_access_domain_error::WorkAccessDomainError,
            queries::{
                check_work_system_access_query::CheckWorkSystemAccessQuery,
                list_work_systems_query::ListWorkSystemsQuery,
            },
        },
        services::work_access_query_service::{
            AccessCheckResult, WorkAccessQueryService, WorkSystemAccessView, WorkSystemSummary,
        },
    },
    infrastructure::persistence::repositories::{
        prerequisite_ledger_repository::PrerequisiteLedgerRepository,
        user_directory_repository::UserDirectoryRepository,
        work_system_repository::WorkSystemRepository,
    },
};

pub struct WorkAccessQueryServiceImpl {
    work_system_repository: Arc<dyn WorkSystemRepository>,
    user_directory_repository: Arc<dyn UserDirectoryRepository>,
    prerequisite_ledger_repository: Arc<dyn PrerequisiteLedgerRepository>,
}

impl WorkAccessQueryServiceImpl {
    pub fn new(
        work_system_repository: Arc<dyn WorkSystemRepository>,
        user_directory_repository: Arc<dyn UserDirectoryRepository>,
        prerequisite_ledger_repository: Arc<dyn PrerequisiteLedgerRepository>,
    ) -> Self {
        Self {
            work_system_repository,
            user_directory_repository,
            prerequisite_ledger_repository,
        }
    }
}

#[async_trait]
impl WorkAccessQueryService for WorkAccessQueryServiceImpl {
    async fn handle_check_access(
        &self,
        query: CheckWorkSystemAccessQuery,
    ) -> Result<AccessCheckResult, WorkAccessDomainError> {
        let evaluated = evaluate_current_access(
            self.work_system_repository.as_ref(),
            self.user_directory_repository.as_ref(),
            self.prerequisite_ledger_repository.as_ref(),
            query.user_id(),
            query.work_system_id(),
        )
        .await?;

        let url = if evaluated.decision.allowed {
            Some(evaluated.system.url.clone())
        } else {
            None
        };

        Ok(AccessCheckResult {
            system: WorkSystemAccessView {
                id: evaluated.system.id,
                name: evaluated.system.name.clone(),
                url,
            },
            decision: evaluated.decision,
        })
    }

    async fn handle_list_work_systems(
        &self,
        _query: ListWorkSystemsQuery,
    ) -> Result<Vec<WorkSystemSummary>, WorkAccessDomainError> {
        self.work_system_repository.list_active_systems().await
    }
}
