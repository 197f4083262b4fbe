pub mod access_rule;
pub mod prerequisite_ledger;
pub mod user_snapshot;
pub mod work_system;
