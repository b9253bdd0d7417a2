//! Collection slice: the entity list plus fetch status.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::domain::Entity;
use crate::store::mvi::{Intent, Reducer, SliceState};

/// Client-side snapshot of one entity collection.
///
/// `items` keeps server order and never holds two records with the same id.
/// `loading` and `error` describe the last fetch only; mutations never touch
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<E> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<E: Entity> SliceState for CollectionState<E> {}

impl<E: Entity> CollectionState<E> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

/// Intents that change a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent<E> {
    /// A fetch was issued.
    FetchStarted,

    /// The fetch returned the whole collection.
    FetchSucceeded { items: Vec<E> },

    /// The fetch failed; existing items stay.
    FetchFailed { message: String },

    /// Create confirmed by the server.
    Added { entity: E },

    /// Update confirmed by the server.
    Updated { entity: E },

    /// Delete confirmed by the server.
    Removed { id: String },
}

impl<E: Entity> Intent for CollectionIntent<E> {}

/// Reducer for a plain entity collection.
pub struct CollectionReducer<E>(PhantomData<fn() -> E>);

impl<E: Entity> Reducer for CollectionReducer<E> {
    type State = CollectionState<E>;
    type Intent = CollectionIntent<E>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionIntent::FetchStarted => {
                state.loading = true;
                state.error = None;
                state
            }

            CollectionIntent::FetchSucceeded { items } => CollectionState {
                items: dedupe_by_id(items),
                loading: false,
                error: None,
            },

            CollectionIntent::FetchFailed { message } => {
                state.loading = false;
                state.error = Some(message);
                state
            }

            CollectionIntent::Added { entity } => {
                // A second create answer for the same id replaces in place.
                match state.items.iter_mut().find(|e| e.id() == entity.id()) {
                    Some(existing) => *existing = entity,
                    None => state.items.push(entity),
                }
                state
            }

            CollectionIntent::Updated { entity } => {
                // Unknown ids are ignored: update never inserts.
                if let Some(existing) = state.items.iter_mut().find(|e| e.id() == entity.id()) {
                    *existing = entity;
                }
                state
            }

            CollectionIntent::Removed { id } => {
                state.items.retain(|e| e.id() != id.as_str());
                state
            }
        }
    }
}

/// Keep the first record for every id, preserving order.
fn dedupe_by_id<E: Entity>(items: Vec<E>) -> Vec<E> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|e| seen.insert(e.id().to_string()))
        .collect()
}

/// A reducer whose state contains one entity collection.
///
/// Lets the generic store drive fetch and CRUD for any slice, whether the
/// slice is the bare collection or wraps it with extra local state.
pub trait CollectionSlice: Reducer {
    type Entity: Entity;

    fn collection(state: &Self::State) -> &CollectionState<Self::Entity>;

    /// Wrap a collection intent into this slice's intent type.
    fn lift(intent: CollectionIntent<Self::Entity>) -> Self::Intent;
}

impl<E: Entity> CollectionSlice for CollectionReducer<E> {
    type Entity = E;

    fn collection(state: &Self::State) -> &CollectionState<E> {
        state
    }

    fn lift(intent: CollectionIntent<E>) -> Self::Intent {
        intent
    }
}
