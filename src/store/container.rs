//! The state container: one slice of state plus the API that feeds it.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::EntityApi;
use crate::domain::Entity;
use crate::store::collection::{CollectionIntent, CollectionSlice};
use crate::store::error::StoreError;
use crate::store::mvi::Reducer;

/// Result of a fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was already populated (or a fetch was in flight).
    Skipped,
    /// The fetch succeeded and the collection now holds `count` items.
    Loaded { count: usize },
    /// The fetch failed; the message is also stored in the state's `error`.
    Failed { message: String },
}

/// Client-side store for one slice.
///
/// Cheap to clone: clones share the same state and API. Every state change
/// goes through [`Store::dispatch`], which runs one reducer step under the
/// channel lock, so steps never interleave.
pub struct Store<R: Reducer, A> {
    state: Arc<watch::Sender<R::State>>,
    api: Arc<A>,
}

impl<R: Reducer, A> Clone for Store<R, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: self.api.clone(),
        }
    }
}

impl<R: Reducer, A> Store<R, A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(R::State::default());
        Self {
            state: Arc::new(state),
            api: Arc::new(api),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Receiver notified after every reducer step.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }

    pub fn dispatch(&self, intent: R::Intent) {
        self.dispatch_and_read(intent, |_| ());
    }

    /// Run one reducer step and read the resulting state inside the same step.
    pub(crate) fn dispatch_and_read<T>(
        &self,
        intent: R::Intent,
        read: impl FnOnce(&R::State) -> T,
    ) -> T {
        let mut out = None;
        self.state.send_modify(|state| {
            *state = R::reduce(std::mem::take(state), intent);
            out = Some(read(state));
        });
        match out {
            Some(value) => value,
            None => unreachable!("send_modify runs its closure exactly once"),
        }
    }

    pub(crate) fn read<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state.borrow())
    }
}

impl<R, A> Store<R, A>
where
    R: CollectionSlice,
    A: EntityApi<R::Entity>,
{
    /// Current items in server order.
    pub fn items(&self) -> Vec<R::Entity> {
        self.read(|state| R::collection(state).items.clone())
    }

    /// Local lookup; never calls the API.
    pub fn find(&self, id: &str) -> Option<R::Entity> {
        self.read(|state| R::collection(state).find(id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| R::collection(state).loading)
    }

    pub fn error(&self) -> Option<String> {
        self.read(|state| R::collection(state).error.clone())
    }

    /// Initial fetch.
    ///
    /// Only fetches while the collection is empty and no fetch is running;
    /// once populated the store keeps its items until [`Store::refresh`].
    pub async fn load(&self) -> LoadOutcome {
        let started = self.state.send_if_modified(|state| {
            let collection = R::collection(state);
            if !collection.is_empty() || collection.loading {
                return false;
            }
            *state = R::reduce(std::mem::take(state), R::lift(CollectionIntent::FetchStarted));
            true
        });

        if !started {
            tracing::debug!(resource = <R::Entity as Entity>::RESOURCE, "Collection already loaded, skipping fetch");
            return LoadOutcome::Skipped;
        }
        self.complete_fetch().await
    }

    /// Fetch unconditionally, replacing the items on success.
    pub async fn refresh(&self) -> LoadOutcome {
        self.dispatch(R::lift(CollectionIntent::FetchStarted));
        self.complete_fetch().await
    }

    async fn complete_fetch(&self) -> LoadOutcome {
        match self.api.list().await {
            Ok(items) => {
                let received = items.len();
                let count = self.dispatch_and_read(
                    R::lift(CollectionIntent::FetchSucceeded { items }),
                    |state| R::collection(state).items.len(),
                );
                if count < received {
                    tracing::warn!(
                        resource = <R::Entity as Entity>::RESOURCE,
                        dropped = received - count,
                        "Fetched collection contained duplicate ids"
                    );
                }
                tracing::info!(resource = <R::Entity as Entity>::RESOURCE, count, "Collection loaded");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(resource = <R::Entity as Entity>::RESOURCE, error = %message, "Collection fetch failed");
                self.dispatch(R::lift(CollectionIntent::FetchFailed {
                    message: message.clone(),
                }));
                LoadOutcome::Failed { message }
            }
        }
    }

    /// Create remotely, then append the server's record.
    ///
    /// The draft is sent as given; input checks belong to the forms.
    pub async fn add(
        &self,
        draft: <R::Entity as Entity>::Draft,
    ) -> Result<R::Entity, StoreError> {
        let created = self.api.create(&draft).await?;
        tracing::info!(resource = <R::Entity as Entity>::RESOURCE, id = created.id(), "Record created");
        self.dispatch(R::lift(CollectionIntent::Added {
            entity: created.clone(),
        }));
        Ok(created)
    }

    /// Update remotely, then replace the local record by id.
    ///
    /// If the id is not in the collection the remote call still happens, but
    /// the confirmed record is not inserted.
    pub async fn update(&self, entity: R::Entity) -> Result<R::Entity, StoreError> {
        let updated = self.api.update(&entity).await?;

        let known = self.read(|state| R::collection(state).contains(updated.id()));
        if known {
            tracing::info!(resource = <R::Entity as Entity>::RESOURCE, id = updated.id(), "Record updated");
        } else {
            tracing::warn!(
                resource = <R::Entity as Entity>::RESOURCE,
                id = updated.id(),
                "Update confirmed for a record missing from the collection; not inserted"
            );
        }
        self.dispatch(R::lift(CollectionIntent::Updated {
            entity: updated.clone(),
        }));
        Ok(updated)
    }

    /// Delete remotely, then drop the local record.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.api.remove(id).await?;
        tracing::info!(resource = <R::Entity as Entity>::RESOURCE, id, "Record removed");
        self.dispatch(R::lift(CollectionIntent::Removed { id: id.to_string() }));
        Ok(())
    }
}
