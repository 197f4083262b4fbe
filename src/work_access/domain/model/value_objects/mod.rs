pub mod user_id;
pub mod work_system_id;
