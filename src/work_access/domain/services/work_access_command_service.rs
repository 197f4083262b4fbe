use async_trait::async_trait;

use crate::work_access::domain::model::{
    commands::grant_work_system_access_command::GrantWorkSystemAccessCommand,
    enums::work_access_domain_error::WorkAccessDomainError,
};

#[derive(Clone, Debug)]
pub struct AccessGrantResult {
    pub granted: bool,
    pub url: Option<String>,
    pub blockers: Vec<String>,
}

#[async_trait]
pub trait WorkAccessCommandService: Send + Sync {
    async fn handle_grant_access(
        &self,
        command: GrantWorkSystemAccessCommand,
    ) -> Result<AccessGrantResult, WorkAccessDomainError>;
}
