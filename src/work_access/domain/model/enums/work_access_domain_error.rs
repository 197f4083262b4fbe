use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkAccessDomainError {
    #[error("user id is invalid")]
    InvalidUserId,

    #[error("work system id is invalid")]
    InvalidWorkSystemId,

    #[error("user not found")]
    UserNotFound,

    #[error("work system not found")]
    WorkSystemNotFound,

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}
