use crate::work_access::domain::model::{
    enums::work_access_domain_error::WorkAccessDomainError,
    value_objects::{user_id::UserId, work_system_id::WorkSystemId},
};

#[derive(Clone, Debug)]
pub struct GrantWorkSystemAccessCommand {
    user_id: UserId,
    work_system_id: WorkSystemId,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

pub struct GrantWorkSystemAccessCommandParts {
    pub user_id: String,
    pub work_system_id: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl GrantWorkSystemAccessCommand {
    pub fn new(parts: GrantWorkSystemAccessCommandParts) -> Result<Self, WorkAccessDomainError> {
        Ok(Self {
            user_id: UserId::new(parts.user_id)?,
            work_system_id: WorkSystemId::new(parts.work_system_id)?,
            ip_address: parts.ip_address,
            user_agent: parts.user_agent,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn work_system_id(&self) -> &WorkSystemId {
        &self.work_system_id
    }
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
