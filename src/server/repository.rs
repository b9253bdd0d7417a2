use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::domain::{Entity, IdGenerator};
use crate::server::error::ServerError;

/// In-memory storage for one resource.
///
/// Clones share the same records. Every operation holds the lock for its
/// whole duration, so concurrent requests apply one at a time.
pub struct Repository<E> {
    records: Arc<Mutex<Vec<E>>>,
    ids: Arc<IdGenerator>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            ids: self.ids.clone(),
        }
    }
}

impl<E: Entity> Default for Repository<E> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<E: Entity> Repository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    pub fn list(&self) -> Vec<E> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn get(&self, id: &str) -> Result<E, ServerError> {
        self.records
            .lock()
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(ServerError::NotFound { label: E::LABEL })
    }

    /// Store a draft under a freshly generated id.
    pub fn insert(&self, draft: E::Draft) -> E {
        let entity = E::from_draft(self.ids.next_id(), draft);
        self.records.lock().push(entity.clone());
        entity
    }

    /// Shallow-merge a JSON object into the stored record.
    ///
    /// Fields absent from `patch` keep their stored value. An `id` in the
    /// patch is ignored: the path id always wins.
    pub fn merge(&self, id: &str, patch: Value) -> Result<E, ServerError> {
        let Value::Object(patch) = patch else {
            return Err(ServerError::InvalidBody("expected a JSON object".to_string()));
        };

        let mut records = self.records.lock();
        let slot = records
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(ServerError::NotFound { label: E::LABEL })?;

        let mut merged = serde_json::to_value(&*slot)
            .map_err(|e| ServerError::InvalidBody(e.to_string()))?;
        if let Value::Object(fields) = &mut merged {
            for (key, value) in patch {
                if key != "id" {
                    fields.insert(key, value);
                }
            }
        }

        let updated: E =
            serde_json::from_value(merged).map_err(|e| ServerError::InvalidBody(e.to_string()))?;
        *slot = updated.clone();
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), ServerError> {
        let mut records = self.records.lock();
        let index = records
            .iter()
            .position(|e| e.id() == id)
            .ok_or(ServerError::NotFound { label: E::LABEL })?;
        records.remove(index);
        Ok(())
    }
}
