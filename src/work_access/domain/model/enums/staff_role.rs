use std::str::FromStr;

use super::work_access_domain_error::WorkAccessDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StaffRole {
    Admin,
    Manager,
    Staff,
    Contractor,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Staff => "STAFF",
            Self::Contractor => "CONTRACTOR",
        }
    }
}

impl FromStr for StaffRole {
    type Err = WorkAccessDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "STAFF" => Ok(Self::Staff),
            "CONTRACTOR" => Ok(Self::Contractor),
            _ => Err(WorkAccessDomainError::StorageUnavailable(
                "invalid role stored".to_string(),
            )),
        }
    }
}
