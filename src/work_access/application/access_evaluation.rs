use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::work_access::{
    domain::{
        model::{
            entities::work_system::WorkSystem,
            enums::work_access_domain_error::WorkAccessDomainError,
            value_objects::{user_id::UserId, work_system_id::WorkSystemId},
        },
        services::access_evaluator::{AccessDecision, evaluate_access},
    },
    infrastructure::persistence::repositories::{
        prerequisite_ledger_repository::PrerequisiteLedgerRepository,
        user_directory_repository::UserDirectoryRepository,
        work_system_repository::WorkSystemRepository,
    },
};

pub struct EvaluatedAccess {
    pub system: WorkSystem,
    pub decision: AccessDecision,
}

/// Shared by the check and grant paths. Reads the system, snapshot and
/// ledger fresh on every call; decisions are never cached because
/// completions, expiries and role changes must be reflected immediately.
pub async fn evaluate_current_access(
    work_system_repository: &dyn WorkSystemRepository,
    user_directory_repository: &dyn UserDirectoryRepository,
    prerequisite_ledger_repository: &dyn PrerequisiteLedgerRepository,
    user_id: &UserId,
    work_system_id: &WorkSystemId,
) -> Result<EvaluatedAccess, WorkAccessDomainError> {
    let system = work_system_repository
        .find_active_system(work_system_id)
        .await?
        .ok_or(WorkAccessDomainError::WorkSystemNotFound)?;

    let user = user_directory_repository
        .find_snapshot(user_id)
        .await?
        .ok_or(WorkAccessDomainError::UserNotFound)?;

    let ledger = prerequisite_ledger_repository
        .find_valid_prerequisites(user_id, Utc::now())
        .await?;

    let required_training_ids = collect_required(&system, |rule| &rule.required_training_ids);
    let required_policy_ids = collect_required(&system, |rule| &rule.required_policy_ids);

    let training_titles = if required_training_ids.is_empty() {
        HashMap::new()
    } else {
        prerequisite_ledger_repository
            .resolve_training_titles(&required_training_ids)
            .await?
    };
    let policy_titles = if required_policy_ids.is_empty() {
        HashMap::new()
    } else {
        prerequisite_ledger_repository
            .resolve_policy_titles(&required_policy_ids)
            .await?
    };

    let decision = evaluate_access(
        &user,
        &ledger,
        &system.rules,
        &training_titles,
        &policy_titles,
    );

    Ok(EvaluatedAccess { system, decision })
}

fn collect_required(
    system: &WorkSystem,
    select: impl Fn(&crate::work_access::domain::model::entities::access_rule::AccessRule) -> &Vec<Uuid>,
) -> Vec<Uuid> {
    let mut ids = Vec::new();
    for rule in system.rules.iter().filter(|rule| rule.active) {
        for id in select(rule) {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
    }
    ids
}
