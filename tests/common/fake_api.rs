//! Scripted in-memory [`EntityApi`] for store tests.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use catalog_console::api::{ApiError, EntityApi};
use catalog_console::domain::{Entity, IdGenerator};
use parking_lot::Mutex;

/// A recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create,
    Update(String),
    Remove(String),
}

pub struct FakeApi<E: Entity> {
    records: Mutex<Vec<E>>,
    ids: IdGenerator,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<VecDeque<ApiError>>,
    delays: Mutex<VecDeque<Duration>>,
}

impl<E: Entity> FakeApi<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: Mutex::new(records),
            ids: IdGenerator::new(),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            delays: Mutex::new(VecDeque::new()),
        }
    }

    /// The next call fails with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.failures.lock().push_back(err);
    }

    /// The next call waits `delay` before answering.
    pub fn delay_next(&self, delay: Duration) {
        self.delays.lock().push_back(delay);
    }

    /// Replace what the server holds without going through the API.
    pub fn set_records(&self, records: Vec<E>) {
        *self.records.lock() = records;
    }

    pub fn records(&self) -> Vec<E> {
        self.records.lock().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Record the call, then apply any scripted delay and failure.
    async fn begin(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        let delay = self.delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.failures.lock().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::NotFound {
            resource: E::LABEL,
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityApi<E> for FakeApi<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.begin(Call::List).await?;
        Ok(self.records())
    }

    async fn get(&self, id: &str) -> Result<E, ApiError> {
        self.begin(Call::Get(id.to_string())).await?;
        self.records
            .lock()
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        self.begin(Call::Create).await?;
        let entity = E::from_draft(self.ids.next_id(), draft.clone());
        self.records.lock().push(entity.clone());
        Ok(entity)
    }

    /// Echoes the entity; replaces the stored copy when there is one.
    async fn update(&self, entity: &E) -> Result<E, ApiError> {
        self.begin(Call::Update(entity.id().to_string())).await?;
        let mut records = self.records.lock();
        if let Some(slot) = records.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.begin(Call::Remove(id.to_string())).await?;
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|e| e.id() != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
