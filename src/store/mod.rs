//! Client-side state containers.
//!
//! Each store owns one slice of state behind a [`tokio::sync::watch`]
//! channel and the [`EntityApi`](crate::api::EntityApi) that feeds it.
//! Remote calls happen outside the reducer; their results come back as
//! intents, so the reducer stays a pure `(State, Intent) -> State` step.

pub mod collection;
pub mod container;
pub mod error;
pub mod mvi;
pub mod products;
pub mod selectors;

use crate::api::RestClient;
use crate::domain::{Product, User};

pub use collection::{CollectionIntent, CollectionReducer, CollectionSlice, CollectionState};
pub use container::{LoadOutcome, Store};
pub use error::StoreError;
pub use products::{Favorites, ProductsIntent, ProductsReducer, ProductsState};

pub type ProductStore<A = RestClient<Product>> = Store<ProductsReducer, A>;

pub type UserReducer = CollectionReducer<User>;
pub type UserStore<A = RestClient<User>> = Store<UserReducer, A>;
