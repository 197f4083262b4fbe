use std::collections::HashMap;

use uuid::Uuid;

use crate::work_access::domain::model::entities::{
    access_rule::AccessRule, prerequisite_ledger::PrerequisiteLedger, user_snapshot::UserSnapshot,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub blockers: Vec<String>,
}

/// Walks every active rule and collects every blocker instead of stopping
/// at the first failure, so a denied user sees the full list of reasons in
/// one pass. Within a single rule the coarse gates (role, department,
/// country) suppress the remaining clauses of that rule once one of them
/// fails; the training and policy clauses are reported independently of
/// each other. Blocker order is fixed: rule order, then clause order.
pub fn evaluate_access(
    user: &UserSnapshot,
    ledger: &PrerequisiteLedger,
    rules: &[AccessRule],
    training_titles: &HashMap<Uuid, String>,
    policy_titles: &HashMap<Uuid, String>,
) -> AccessDecision {
    let mut blockers = Vec::new();

    for rule in rules.iter().filter(|rule| rule.active) {
        let mut gate_failed = false;

        if !rule.allowed_roles.is_empty() && !rule.allowed_roles.contains(&user.role) {
            blockers.push(format!(
                "Role restriction: {} not allowed",
                user.role.as_str()
            ));
            gate_failed = true;
        }

        if !gate_failed && !rule.allowed_departments.is_empty() {
            if let Some(department) = user.department.as_deref() {
                if !rule.allowed_departments.iter().any(|d| d == department) {
                    blockers.push(format!(
                        "Department restriction: {} not allowed",
                        department
                    ));
                    gate_failed = true;
                }
            }
        }

        if !gate_failed && !rule.allowed_countries.is_empty() {
            if let Some(country) = user.country.as_deref() {
                if !rule.allowed_countries.iter().any(|c| c == country) {
                    blockers.push(format!("Country restriction: {} not allowed", country));
                    gate_failed = true;
                }
            }
        }

        if gate_failed {
            continue;
        }

        let missing_trainings = missing_ids(&rule.required_training_ids, ledger, true);
        if !missing_trainings.is_empty() {
            blockers.push(format!(
                "Missing required trainings: {}",
                joined_titles(&missing_trainings, training_titles)
            ));
        }

        let missing_policies = missing_ids(&rule.required_policy_ids, ledger, false);
        if !missing_policies.is_empty() {
            blockers.push(format!(
                "Missing required policy certifications: {}",
                joined_titles(&missing_policies, policy_titles)
            ));
        }
    }

    AccessDecision {
        allowed: blockers.is_empty(),
        blockers,
    }
}

fn missing_ids(required: &[Uuid], ledger: &PrerequisiteLedger, trainings: bool) -> Vec<Uuid> {
    let valid = if trainings {
        &ledger.valid_training_ids
    } else {
        &ledger.valid_policy_ids
    };

    required
        .iter()
        .filter(|id| !valid.contains(id))
        .copied()
        .collect()
}

fn joined_titles(ids: &[Uuid], titles: &HashMap<Uuid, String>) -> String {
    ids.iter()
        .map(|id| {
            titles
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
