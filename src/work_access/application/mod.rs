pub mod access_evaluation;
pub mod command_services;
pub mod query_services;
