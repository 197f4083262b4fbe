use uuid::Uuid;

use crate::work_access::domain::model::enums::work_access_domain_error::WorkAccessDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WorkSystemId(Uuid);

impl WorkSystemId {
    pub fn new(value: String) -> Result<Self, WorkAccessDomainError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| WorkAccessDomainError::InvalidWorkSystemId)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
