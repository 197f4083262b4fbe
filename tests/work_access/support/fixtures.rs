use std::collections::HashSet;

use staff_portal_api::work_access::domain::model::{
    commands::grant_work_system_access_command::{
        GrantWorkSystemAccessCommand, GrantWorkSystemAccessCommandParts,
    },
    entities::{
        access_rule::AccessRule, prerequisite_ledger::PrerequisiteLedger,
        user_snapshot::UserSnapshot, work_system::WorkSystem,
    },
    enums::staff_role::StaffRole,
    queries::check_work_system_access_query::CheckWorkSystemAccessQuery,
};
use uuid::Uuid;

pub const USER_1_ID: &str = "018f32a0-4c2d-7a31-9c55-0aa1b2c3d4e5";
pub const SYSTEM_A_ID: &str = "018f32a0-5e6f-7b42-8d66-1bb2c3d4e5f6";
pub const TRAINING_1_ID: &str = "018f32a0-6071-7c53-9e77-2cc3d4e5f607";
pub const TRAINING_2_ID: &str = "018f32a0-7182-7d64-8f88-3dd4e5f60718";
pub const POLICY_1_ID: &str = "018f32a0-8293-7e75-9099-4ee5f6071829";

pub fn uuid_of(value: &str) -> Uuid {
    Uuid::parse_str(value).expect("valid fixture uuid")
}

pub fn staff_snapshot(role: StaffRole) -> UserSnapshot {
    UserSnapshot {
        role,
        department: Some("Engineering".to_string()),
        country: Some("DE".to_string()),
    }
}

pub fn unrestricted_rule() -> AccessRule {
    AccessRule {
        id: Uuid::now_v7(),
        work_system_id: uuid_of(SYSTEM_A_ID),
        active: true,
        allowed_roles: vec![],
        allowed_departments: vec![],
        allowed_countries: vec![],
        required_training_ids: vec![],
        required_policy_ids: vec![],
    }
}

pub fn system_with_rules(rules: Vec<AccessRule>) -> WorkSystem {
    WorkSystem {
        id: uuid_of(SYSTEM_A_ID),
        name: "Payroll Console".to_string(),
        url: "https://payroll.internal.example".to_string(),
        active: true,
        display_order: 1,
        rules,
    }
}

pub fn empty_ledger() -> PrerequisiteLedger {
    PrerequisiteLedger::default()
}

pub fn ledger_with_trainings(training_ids: Vec<Uuid>) -> PrerequisiteLedger {
    PrerequisiteLedger {
        valid_training_ids: training_ids.into_iter().collect::<HashSet<_>>(),
        valid_policy_ids: HashSet::new(),
    }
}

pub fn check_query() -> CheckWorkSystemAccessQuery {
    CheckWorkSystemAccessQuery::new(USER_1_ID.to_string(), SYSTEM_A_ID.to_string())
        .expect("valid check query")
}

pub fn grant_command() -> GrantWorkSystemAccessCommand {
    GrantWorkSystemAccessCommand::new(GrantWorkSystemAccessCommandParts {
        user_id: USER_1_ID.to_string(),
        work_system_id: SYSTEM_A_ID.to_string(),
        ip_address: Some("10.1.2.3".to_string()),
        user_agent: Some("portal-web/2.4".to_string()),
    })
    .expect("valid grant command")
}
