use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::work_access::{
    domain::model::{
        entities::prerequisite_ledger::PrerequisiteLedger,
        enums::work_access_domain_error::WorkAccessDomainError, value_objects::user_id::UserId,
    },
    infrastructure::persistence::repositories::prerequisite_ledger_repository::PrerequisiteLedgerRepository,
};

pub struct SqlxPrerequisiteLedgerRepositoryImpl {
    pool: PgPool,
}

impl SqlxPrerequisiteLedgerRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_titles(
        &self,
        table_statement: &str,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (Uuid, String)>(table_statement)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        Ok(rows.into_iter().collect())
    }
}

#[async_trait]
impl PrerequisiteLedgerRepository for SqlxPrerequisiteLedgerRepositoryImpl {
    async fn find_valid_prerequisites(
        &self,
        user_id: &UserId,
        as_of: DateTime<Utc>,
    ) -> Result<PrerequisiteLedger, WorkAccessDomainError> {
        let trainings_statement = r#"
            SELECT training_id, expires_at
            FROM training_completions
            WHERE user_id = $1 AND status = 'completed'
        "#;

        let training_rows =
            sqlx::query_as::<_, (Uuid, Option<DateTime<Utc>>)>(trainings_statement)
                .bind(user_id.value())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        let policies_statement = r#"
            SELECT policy_id, expires_at
            FROM policy_acknowledgments
            WHERE user_id = $1 AND status = 'acknowledged'
        "#;

        let policy_rows = sqlx::query_as::<_, (Uuid, Option<DateTime<Utc>>)>(policies_statement)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        Ok(PrerequisiteLedger {
            valid_training_ids: training_rows
                .into_iter()
                .filter(|(_, expires_at)| PrerequisiteLedger::is_valid_at(*expires_at, as_of))
                .map(|(training_id, _)| training_id)
                .collect(),
            valid_policy_ids: policy_rows
                .into_iter()
                .filter(|(_, expires_at)| PrerequisiteLedger::is_valid_at(*expires_at, as_of))
                .map(|(policy_id, _)| policy_id)
                .collect(),
        })
    }

    async fn resolve_training_titles(
        &self,
        training_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError> {
        let statement = r#"
            SELECT id, title
            FROM trainings
            WHERE id = ANY($1)
        "#;

        self.fetch_titles(statement, training_ids).await
    }

    async fn resolve_policy_titles(
        &self,
        policy_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError> {
        let statement = r#"
            SELECT id, title
            FROM policies
            WHERE id = ANY($1)
        "#;

        self.fetch_titles(statement, policy_ids).await
    }
}
