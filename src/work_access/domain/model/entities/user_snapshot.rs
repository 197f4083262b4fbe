use crate::work_access::domain::model::enums::staff_role::StaffRole;

/// The evaluation subject as read at evaluation time. Role and department
/// can change between requests, so a snapshot is never reused across calls.
#[derive(Clone, Debug)]
pub struct UserSnapshot {
    pub role: StaffRole,
    pub department: Option<String>,
    pub country: Option<String>,
}
