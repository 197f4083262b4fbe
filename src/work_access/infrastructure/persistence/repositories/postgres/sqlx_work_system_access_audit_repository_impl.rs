use async_trait::async_trait;
use sqlx::PgPool;

use crate::work_access::{
    domain::model::{
        enums::work_access_domain_error::WorkAccessDomainError,
        events::work_system_access_recorded_event::WorkSystemAccessRecordedEvent,
    },
    infrastructure::persistence::repositories::work_system_access_audit_repository::WorkSystemAccessAuditRepository,
};

pub struct SqlxWorkSystemAccessAuditRepositoryImpl {
    pool: PgPool,
}

impl SqlxWorkSystemAccessAuditRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkSystemAccessAuditRepository for SqlxWorkSystemAccessAuditRepositoryImpl {
    async fn append_entry(
        &self,
        event: &WorkSystemAccessRecordedEvent,
    ) -> Result<(), WorkAccessDomainError> {
        let statement = r#"
            INSERT INTO activity_audit_log (
                user_id,
                action,
                resource_id,
                details,
                ip_address,
                user_agent,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(event.user_id)
            .bind(event.action)
            .bind(event.resource_id)
            .bind(&event.details)
            .bind(&event.ip_address)
            .bind(&event.user_agent)
            .bind(event.occurred_at)
            .execute(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        Ok(())
    }
}
