pub mod sqlx_access_counter_repository_impl;
pub mod sqlx_prerequisite_ledger_repository_impl;
pub mod sqlx_user_directory_repository_impl;
pub mod sqlx_work_system_access_audit_repository_impl;
pub mod sqlx_work_system_repository_impl;
