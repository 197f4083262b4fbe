pub mod check_work_system_access_query;
pub mod list_work_systems_query;
