pub mod grant_work_system_access_command;
