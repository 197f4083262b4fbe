pub mod access_counter_repository;
pub mod postgres;
pub mod prerequisite_ledger_repository;
pub mod user_directory_repository;
pub mod work_system_access_audit_repository;
pub mod work_system_repository;
