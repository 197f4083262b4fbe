pub mod work_access_command_service_impl;
