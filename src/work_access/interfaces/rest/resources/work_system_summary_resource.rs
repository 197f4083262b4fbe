use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WorkSystemSummaryResource {
    pub id: String,
    pub name: String,
    pub display_order: i32,
}
