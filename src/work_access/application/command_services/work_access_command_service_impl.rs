use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::work_access::{
    application::access_evaluation::evaluate_current_access,
    domain::{
        model::{
            commands::grant_work_system_access_command::GrantWorkSystemAccessCommand,
            enums::work_access_domain_error::WorkAccessDomainError,
            events::work_system_access_recorded_event::{
                ACCESS_SYSTEM_ACTION, WorkSystemAccessRecordedEvent,
            },
        },
        services::work_access_command_service::{AccessGrantResult, WorkAccessCommandService},
    },
    infrastructure::persistence::repositories::{
        access_counter_repository::AccessCounterRepository,
        prerequisite_ledger_repository::PrerequisiteLedgerRepository,
        user_directory_repository::UserDirectoryRepository,
        work_system_access_audit_repository::WorkSystemAccessAuditRepository,
        work_system_repository::WorkSystemRepository,
    },
};

pub struct WorkAccessCommandServiceImpl {
    work_system_repository: Arc<dyn WorkSystemRepository>,
    user_directory_repository: Arc<dyn UserDirectoryRepository>,
    prerequisite_ledger_repository: Arc<dyn PrerequisiteLedgerRepository>,
    access_counter_repository: Arc<dyn AccessCounterRepository>,
    audit_repository: Arc<dyn WorkSystemAccessAuditRepository>,
}

impl WorkAccessCommandServiceImpl {
    pub fn new(
        work_system_repository: Arc<dyn WorkSystemRepository>,
        user_directory_repository: Arc<dyn UserDirectoryRepository>,
        prerequisite_ledger_repository: Arc<dyn PrerequisiteLedgerRepository>,
        access_counter_repository: Arc<dyn AccessCounterRepository>,
        audit_repository: Arc<dyn WorkSystemAccessAuditRepository>,
    ) -> Self {
        Self {
            work_system_repository,
            user_directory_repository,
            prerequisite_ledger_repository,
            access_counter_repository,
            audit_repository,
        }
    }
}

#[async_trait]
impl WorkAccessCommandService for WorkAccessCommandServiceImpl {
    async fn handle_grant_access(
        &self,
        command: GrantWorkSystemAccessCommand,
    ) -> Result<AccessGrantResult, WorkAccessDomainError> {
        let evaluated = evaluate_current_access(
            self.work_system_repository.as_ref(),
            self.user_directory_repository.as_ref(),
            self.prerequisite_ledger_repository.as_ref(),
            command.user_id(),
            command.work_system_id(),
        )
        .await?;

        if !evaluated.decision.allowed {
            return Ok(AccessGrantResult {
                granted: false,
                url: None,
                blockers: evaluated.decision.blockers,
            });
        }

        // The counter write is the last effectful step; a cancelled or
        // failed evaluation never increments.
        self.access_counter_repository
            .increment_access(command.user_id(), command.work_system_id())
            .await?;

        let event = WorkSystemAccessRecordedEvent {
            user_id: command.user_id().value(),
            action: ACCESS_SYSTEM_ACTION,
            resource_id: evaluated.system.id,
            details: evaluated.system.name.clone(),
            ip_address: command.ip_address().map(str::to_string),
            user_agent: command.user_agent().map(str::to_string),
            occurred_at: Utc::now(),
        };

        // The grant already succeeded; an audit failure must not take it back.
        if let Err(error) = self.audit_repository.append_entry(&event).await {
            tracing::warn!(
                user_id = %event.user_id,
                work_system_id = %event.resource_id,
                %error,
                "audit append failed after grant"
            );
        }

        Ok(AccessGrantResult {
            granted: true,
            url: Some(evaluated.system.url),
            blockers: Vec::new(),
        })
    }
}
