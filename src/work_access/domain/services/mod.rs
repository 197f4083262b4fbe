pub mod access_evaluator;
pub mod work_access_command_service;
pub mod work_access_query_service;
