use async_trait::async_trait;
use sqlx::PgPool;

use crate::work_access::{
    domain::model::{
        entities::user_snapshot::UserSnapshot,
        enums::work_access_domain_error::WorkAccessDomainError, value_objects::user_id::UserId,
    },
    infrastructure::persistence::repositories::user_directory_repository::UserDirectoryRepository,
};

pub struct SqlxUserDirectoryRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserDirectoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectoryRepository for SqlxUserDirectoryRepositoryImpl {
    async fn find_snapshot(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserSnapshot>, WorkAccessDomainError> {
        let statement = r#"
            SELECT role, department, country
            FROM users
            WHERE id = $1 AND active = TRUE
        "#;

        let row = sqlx::query_as::<_, (String, Option<String>, Option<String>)>(statement)
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        row.map(|(role, department, country)| {
            Ok(UserSnapshot {
                role: role.parse()?,
                department,
                country,
            })
        })
        .transpose()
    }
}
