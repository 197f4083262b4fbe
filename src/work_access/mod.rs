use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    work_access::{
        application::{
            command_services::work_access_command_service_impl::WorkAccessCommandServiceImpl,
            query_services::work_access_query_service_impl::WorkAccessQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_access_counter_repository_impl::SqlxAccessCounterRepositoryImpl,
            sqlx_prerequisite_ledger_repository_impl::SqlxPrerequisiteLedgerRepositoryImpl,
            sqlx_user_directory_repository_impl::SqlxUserDirectoryRepositoryImpl,
            sqlx_work_system_access_audit_repository_impl::SqlxWorkSystemAccessAuditRepositoryImpl,
            sqlx_work_system_repository_impl::SqlxWorkSystemRepositoryImpl,
        },
        interfaces::rest::controllers::work_access_rest_controller::{
            WorkAccessRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_work_access_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let work_system_repository = Arc::new(SqlxWorkSystemRepositoryImpl::new(pool.clone()));
    let user_directory_repository = Arc::new(SqlxUserDirectoryRepositoryImpl::new(pool.clone()));
    let prerequisite_ledger_repository =
        Arc::new(SqlxPrerequisiteLedgerRepositoryImpl::new(pool.clone()));
    let access_counter_repository = Arc::new(SqlxAccessCounterRepositoryImpl::new(pool.clone()));
    let audit_repository = Arc::new(SqlxWorkSystemAccessAuditRepositoryImpl::new(pool));

    let command_service = Arc::new(WorkAccessCommandServiceImpl::new(
        work_system_repository.clone(),
        user_directory_repository.clone(),
        prerequisite_ledger_repository.clone(),
        access_counter_repository,
        audit_repository,
    ));
    let query_service = Arc::new(WorkAccessQueryServiceImpl::new(
        work_system_repository,
        user_directory_repository,
        prerequisite_ledger_repository,
    ));

    Ok(router(WorkAccessRestControllerState {
        command_service,
        query_service,
    }))
}
