//! Product slice: the product collection plus the local favorites set.

use std::collections::HashSet;

use crate::domain::Product;
use crate::store::collection::{CollectionIntent, CollectionReducer, CollectionSlice, CollectionState};
use crate::store::container::Store;
use crate::store::mvi::{Intent, Reducer, SliceState};

/// Ids of favorite products. Unordered; presence is the only meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites(HashSet<String>);

impl Favorites {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn toggle(&mut self, id: String) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    fn remove(&mut self, id: &str) {
        self.0.remove(id);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsState {
    pub collection: CollectionState<Product>,
    pub favorites: Favorites,
}

impl SliceState for ProductsState {}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsIntent {
    Collection(CollectionIntent<Product>),

    /// Flip the favorite flag of a product. Local only.
    ToggleFavorite { id: String },
}

impl Intent for ProductsIntent {}

impl From<CollectionIntent<Product>> for ProductsIntent {
    fn from(intent: CollectionIntent<Product>) -> Self {
        ProductsIntent::Collection(intent)
    }
}

pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    type State = ProductsState;
    type Intent = ProductsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let ProductsState {
            collection,
            mut favorites,
        } = state;

        match intent {
            ProductsIntent::Collection(intent) => {
                // A removed product takes its favorite entry with it, in the same step.
                if let CollectionIntent::Removed { id } = &intent {
                    favorites.remove(id);
                }
                ProductsState {
                    collection: CollectionReducer::<Product>::reduce(collection, intent),
                    favorites,
                }
            }
            ProductsIntent::ToggleFavorite { id } => {
                favorites.toggle(id);
                ProductsState {
                    collection,
                    favorites,
                }
            }
        }
    }
}

impl CollectionSlice for ProductsReducer {
    type Entity = Product;

    fn collection(state: &ProductsState) -> &CollectionState<Product> {
        &state.collection
    }

    fn lift(intent: CollectionIntent<Product>) -> ProductsIntent {
        intent.into()
    }
}

impl<A> Store<ProductsReducer, A> {
    /// Flip the favorite flag locally. Returns whether `id` is now a favorite.
    ///
    /// The id is not checked against the collection.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let now = self.dispatch_and_read(
            ProductsIntent::ToggleFavorite { id: id.to_string() },
            |state| state.favorites.contains(id),
        );
        tracing::debug!(id, favorite = now, "Favorite toggled");
        now
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.read(|state| state.favorites.contains(id))
    }

    pub fn favorites(&self) -> Favorites {
        self.read(|state| state.favorites.clone())
    }
}
