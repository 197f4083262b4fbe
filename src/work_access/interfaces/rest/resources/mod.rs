pub mod check_work_system_access_response_resource;
pub mod grant_work_system_access_response_resource;
pub mod work_access_error_response_resource;
pub mod work_system_summary_resource;
