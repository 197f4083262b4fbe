use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use staff_portal_api::work_access::{
    domain::{
        model::{
            entities::{
                prerequisite_ledger::PrerequisiteLedger, user_snapshot::UserSnapshot,
                work_system::WorkSystem,
            },
            enums::work_access_domain_error::WorkAccessDomainError,
            events::work_system_access_recorded_event::WorkSystemAccessRecordedEvent,
            value_objects::{user_id::UserId, work_system_id::WorkSystemId},
        },
        services::work_access_query_service::WorkSystemSummary,
    },
    infrastructure::persistence::repositories::{
        access_counter_repository::{AccessCounterRecord, AccessCounterRepository},
        prerequisite_ledger_repository::PrerequisiteLedgerRepository,
        user_directory_repository::UserDirectoryRepository,
        work_system_access_audit_repository::WorkSystemAccessAuditRepository,
        work_system_repository::WorkSystemRepository,
    },
};
use uuid::Uuid;

#[derive(Default)]
struct FakeWorkSystemState {
    find_calls: usize,
    list_calls: usize,
    system_to_return: Option<WorkSystem>,
    summaries_to_return: Vec<WorkSystemSummary>,
}

pub struct FakeWorkSystemRepository {
    state: Mutex<FakeWorkSystemState>,
}

impl FakeWorkSystemRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeWorkSystemState::default()),
        }
    }

    pub fn set_system(&self, system: Option<WorkSystem>) {
        self.state.lock().expect("mutex poisoned").system_to_return = system;
    }

    pub fn set_summaries(&self, summaries: Vec<WorkSystemSummary>) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .summaries_to_return = summaries;
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").list_calls
    }
}

#[async_trait]
impl WorkSystemRepository for FakeWorkSystemRepository {
    async fn find_active_system(
        &self,
        _work_system_id: &WorkSystemId,
    ) -> Result<Option<WorkSystem>, WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.find_calls += 1;
        Ok(state.system_to_return.clone())
    }

    async fn list_active_systems(
        &self,
    ) -> Result<Vec<WorkSystemSummary>, WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_calls += 1;
        Ok(state.summaries_to_return.clone())
    }
}

#[derive(Default)]
struct FakeUserDirectoryState {
    find_calls: usize,
    snapshot_to_return: Option<UserSnapshot>,
}

pub struct FakeUserDirectoryRepository {
    state: Mutex<FakeUserDirectoryState>,
}

impl FakeUserDirectoryRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeUserDirectoryState::default()),
        }
    }

    pub fn set_snapshot(&self, snapshot: Option<UserSnapshot>) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .snapshot_to_return = snapshot;
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }
}

#[async_trait]
impl UserDirectoryRepository for FakeUserDirectoryRepository {
    async fn find_snapshot(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<UserSnapshot>, WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.find_calls += 1;
        Ok(state.snapshot_to_return.clone())
    }
}

#[derive(Default)]
struct FakePrerequisiteLedgerState {
    find_calls: usize,
    ledger_to_return: PrerequisiteLedger,
    training_titles: HashMap<Uuid, String>,
    policy_titles: HashMap<Uuid, String>,
}

pub struct FakePrerequisiteLedgerRepository {
    state: Mutex<FakePrerequisiteLedgerState>,
}

impl FakePrerequisiteLedgerRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakePrerequisiteLedgerState::default()),
        }
    }

    pub fn set_ledger(&self, ledger: PrerequisiteLedger) {
        self.state.lock().expect("mutex poisoned").ledger_to_return = ledger;
    }

    pub fn set_training_titles(&self, titles: HashMap<Uuid, String>) {
        self.state.lock().expect("mutex poisoned").training_titles = titles;
    }

    pub fn set_policy_titles(&self, titles: HashMap<Uuid, String>) {
        self.state.lock().expect("mutex poisoned").policy_titles = titles;
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }
}

#[async_trait]
impl PrerequisiteLedgerRepository for FakePrerequisiteLedgerRepository {
    async fn find_valid_prerequisites(
        &self,
        _user_id: &UserId,
        _as_of: DateTime<Utc>,
    ) -> Result<PrerequisiteLedger, WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.find_calls += 1;
        Ok(state.ledger_to_return.clone())
    }

    async fn resolve_training_titles(
        &self,
        training_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(training_ids
            .iter()
            .filter_map(|id| state.training_titles.get(id).map(|t| (*id, t.clone())))
            .collect())
    }

    async fn resolve_policy_titles(
        &self,
        policy_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, WorkAccessDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(policy_ids
            .iter()
            .filter_map(|id| state.policy_titles.get(id).map(|t| (*id, t.clone())))
            .collect())
    }
}

#[derive(Default)]
struct FakeAccessCounterState {
    increment_calls: usize,
    counts: HashMap<(Uuid, Uuid), i64>,
    fail: bool,
}

pub struct FakeAccessCounterRepository {
    state: Mutex<FakeAccessCounterState>,
}

impl FakeAccessCounterRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAccessCounterState::default()),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.state.lock().expect("mutex poisoned").fail = fail;
    }

    pub fn increment_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").increment_calls
    }

    pub fn count_for(&self, user_id: Uuid, work_system_id: Uuid) -> i64 {
        self.state
            .lock()
            .expect("mutex poisoned")
            .counts
            .get(&(user_id, work_system_id))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl AccessCounterRepository for FakeAccessCounterRepository {
    async fn increment_access(
        &self,
        user_id: &UserId,
        work_system_id: &WorkSystemId,
    ) -> Result<AccessCounterRecord, WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail {
            return Err(WorkAccessDomainError::StorageUnavailable(
                "counter write failed".to_string(),
            ));
        }
        state.increment_calls += 1;
        let count = state
            .counts
            .entry((user_id.value(), work_system_id.value()))
            .or_insert(0);
        *count += 1;
        Ok(AccessCounterRecord {
            access_count: *count,
            last_accessed_at: Utc::now(),
        })
    }
}

#[derive(Default)]
struct FakeAuditState {
    events: Vec<WorkSystemAccessRecordedEvent>,
    fail: bool,
}

pub struct FakeWorkSystemAccessAuditRepository {
    state: Mutex<FakeAuditState>,
}

impl FakeWorkSystemAccessAuditRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAuditState::default()),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.state.lock().expect("mutex poisoned").fail = fail;
    }

    pub fn events(&self) -> Vec<WorkSystemAccessRecordedEvent> {
        self.state.lock().expect("mutex poisoned").events.clone()
    }
}

#[async_trait]
impl WorkSystemAccessAuditRepository for FakeWorkSystemAccessAuditRepository {
    async fn append_entry(
        &self,
        event: &WorkSystemAccessRecordedEvent,
    ) -> Result<(), WorkAccessDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail {
            return Err(WorkAccessDomainError::StorageUnavailable(
                "audit insert failed".to_string(),
            ));
        }
        state.events.push(event.clone());
        Ok(())
    }
}
