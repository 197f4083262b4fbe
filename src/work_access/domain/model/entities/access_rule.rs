use uuid::Uuid;

use crate::work_access::domain::model::enums::staff_role::StaffRole;

/// One eligibility clause set attached to a work system. Empty sets mean
/// unrestricted (roles/departments/countries) or nothing required
/// (trainings/policies).
#[derive(Clone, Debug)]
pub struct AccessRule {
    pub id: Uuid,
    pub work_system_id: Uuid,
    pub active: bool,
    pub allowed_roles: Vec<StaffRole>,
    pub allowed_departments: Vec<String>,
    pub allowed_countries: Vec<String>,
    pub required_training_ids: Vec<Uuid>,
    pub required_policy_ids: Vec<Uuid>,
}
