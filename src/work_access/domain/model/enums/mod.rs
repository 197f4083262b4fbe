pub mod staff_role;
pub mod work_access_domain_error;
