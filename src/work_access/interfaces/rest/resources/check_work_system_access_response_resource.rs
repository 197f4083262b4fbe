use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `url` is omitted whenever `allowed` is false.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WorkSystemAccessViewResource {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CheckWorkSystemAccessResponseResource {
    pub allowed: bool,
    pub blockers: Vec<String>,
    pub system: WorkSystemAccessViewResource,
}
