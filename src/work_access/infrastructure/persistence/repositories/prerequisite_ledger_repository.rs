use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::work_access::domain::model::{
    entities::prerequisite_ledger::PrerequisiteLedger,
    enums::work_access_domain_error::WorkAccessDomainError, value_objects::user_id::UserId,
};

#[async_trait]
pub trait PrerequisiteLedgerRepository: Send + Sync {
    /// Training completions with status `completed` and policy
    /// certifications with status `acknowledged`, excluding anything
    /// expired as of `as_of`.
    async fn find_valid_prerequisites(
        &self,
        user_id: &UserId,
        as_of: DateTime<Utc>,
    ) -> Result<PrerequisiteLedger, WorkAccessDomainError>;

    async fn resolve_training_titles(
        &self,
        training_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError>;

    async fn resolve_policy_titles(
        &self,
        policy_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError>;
}
