use uuid::Uuid;

use crate::work_access::domain::model::entities::access_rule::AccessRule;

#[derive(Clone, Debug)]
pub struct WorkSystem {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub active: bool,
    pub display_order: i32,
    pub rules: Vec<AccessRule>,
}
