use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::work_access::{
    domain::model::{
        enums::work_access_domain_error::WorkAccessDomainError,
        value_objects::{user_id::UserId, work_system_id::WorkSystemId},
    },
    infrastructure::persistence::repositories::access_counter_repository::{
        AccessCounterRecord, AccessCounterRepository,
    },
};

pub struct SqlxAccessCounterRepositoryImpl {
    pool: PgPool,
}

impl SqlxAccessCounterRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessCounterRepository for SqlxAccessCounterRepositoryImpl {
    async fn increment_access(
        &self,
        user_id: &UserId,
        work_system_id: &WorkSystemId,
    ) -> Result<AccessCounterRecord, WorkAccessDomainError> {
        // Single statement so two tabs opening the same system at once
        // cannot lose an increment.
        let statement = r#"
            INSERT INTO work_system_access_counters (user_id, work_system_id, access_count, last_accessed_at)
            VALUES ($1, $2, 1, NOW())
            ON CONFLICT (user_id, work_system_id)
            DO UPDATE SET
                access_count = work_system_access_counters.access_count + 1,
                last_accessed_at = NOW()
            RETURNING access_count, last_accessed_at
        "#;

        let (access_count, last_accessed_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>)>(statement)
                .bind(user_id.value())
                .bind(work_system_id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        Ok(AccessCounterRecord {
            access_count,
            last_accessed_at,
        })
    }
}
