use crate::work_access::domain::model::{
    enums::work_access_domain_error::WorkAccessDomainError,
    value_objects::{user_id::UserId, work_system_id::WorkSystemId},
};

#[derive(Clone, Debug)]
pub struct CheckWorkSystemAccessQuery {
    user_id: UserId,
    work_system_id: WorkSystemId,
}

impl CheckWorkSystemAccessQuery {
    pub fn new(user_id: String, work_system_id: String) -> Result<Self, WorkAccessDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            work_system_id: WorkSystemId::new(work_system_id)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn work_system_id(&self) -> &WorkSystemId {
        &self.work_system_id
    }
}
