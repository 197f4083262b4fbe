use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The user's currently valid trainings and policy certifications,
/// materialized fresh for every evaluation.
#[derive(Clone, Debug, Default)]
pub struct PrerequisiteLedger {
    pub valid_training_ids: HashSet<Uuid>,
    pub valid_policy_ids: HashSet<Uuid>,
}

impl PrerequisiteLedger {
    /// An expiry exactly at the evaluation instant counts as expired.
    pub fn is_valid_at(expires_at: Option<DateTime<Utc>>, as_of: DateTime<Utc>) -> bool {
        match expires_at {
            None => true,
            Some(expiry) => expiry > as_of,
        }
    }
}
