pub mod work_system_access_recorded_event;
