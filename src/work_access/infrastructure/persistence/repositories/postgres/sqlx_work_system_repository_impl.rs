use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::work_access::{
    domain::{
        model::{
            entities::{access_rule::AccessRule, work_system::WorkSystem},
            enums::work_access_domain_error::WorkAccessDomainError,
            value_objects::work_system_id::WorkSystemId,
        },
        services::work_access_query_service::WorkSystemSummary,
    },
    infrastructure::persistence::repositories::work_system_repository::WorkSystemRepository,
};

pub struct SqlxWorkSystemRepositoryImpl {
    pool: PgPool,
}

impl SqlxWorkSystemRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkSystemRepository for SqlxWorkSystemRepositoryImpl {
    async fn find_active_system(
        &self,
        work_system_id: &WorkSystemId,
    ) -> Result<Option<WorkSystem>, WorkAccessDomainError> {
        let system_statement = r#"
            SELECT id, name, url, active, display_order
            FROM work_systems
            WHERE id = $1 AND active = TRUE
        "#;

        let system_row = sqlx::query_as::<_, (Uuid, String, String, bool, i32)>(system_statement)
            .bind(work_system_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        let Some((id, name, url, active, display_order)) = system_row else {
            return Ok(None);
        };

        let rules_statement = r#"
            SELECT id, active, allowed_roles, allowed_departments, allowed_countries,
                   required_training_ids, required_policy_ids
            FROM work_system_access_rules
            WHERE work_system_id = $1 AND active = TRUE
            ORDER BY created_at, id
        "#;

        let rule_rows = sqlx::query_as::<
            _,
            (
                Uuid,
                bool,
                Vec<String>,
                Vec<String>,
                Vec<String>,
                Vec<Uuid>,
                Vec<Uuid>,
            ),
        >(rules_statement)
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        let rules = rule_rows
            .into_iter()
            .map(
                |(
                    rule_id,
                    rule_active,
                    allowed_roles,
                    allowed_departments,
                    allowed_countries,
                    required_training_ids,
                    required_policy_ids,
                )| {
                    Ok(AccessRule {
                        id: rule_id,
                        work_system_id: id,
                        active: rule_active,
                        allowed_roles: allowed_roles
                            .iter()
                            .map(|role| role.parse())
                            .collect::<Result<_, _>>()?,
                        allowed_departments,
                        allowed_countries,
                        required_training_ids,
                        required_policy_ids,
                    })
                },
            )
            .collect::<Result<Vec<_>, WorkAccessDomainError>>()?;

        Ok(Some(WorkSystem {
            id,
            name,
            url,
            active,
            display_order,
            rules,
        }))
    }

    async fn list_active_systems(
        &self,
    ) -> Result<Vec<WorkSystemSummary>, WorkAccessDomainError> {
        let statement = r#"
            SELECT id, name, display_order
            FROM work_systems
            WHERE active = TRUE
            ORDER BY display_order, name
        "#;

        let rows = sqlx::query_as::<_, (Uuid, String, i32)>(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WorkAccessDomainError::StorageUnavailable(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, display_order)| WorkSystemSummary {
                id,
                name,
                display_order,
            })
            .collect())
    }
}
