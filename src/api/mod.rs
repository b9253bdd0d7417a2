//! Remote access to the CRUD API.
//!
//! [`EntityApi`] is the seam between the store and the network: the store
//! only ever talks to this trait, so tests substitute an in-memory fake and
//! the console plugs in [`RestClient`].

mod client;
mod error;

use async_trait::async_trait;

use crate::domain::Entity;

pub use client::{build_http_client, RestClient};
pub use error::ApiError;

/// CRUD operations for one entity type.
///
/// Failures propagate as-is. Implementations must not retry.
#[async_trait]
pub trait EntityApi<E: Entity>: Send + Sync {
    /// Fetch the whole collection in server order.
    async fn list(&self) -> Result<Vec<E>, ApiError>;

    async fn get(&self, id: &str) -> Result<E, ApiError>;

    /// Create a record; the server assigns the id.
    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError>;

    /// Replace a record and return what the server stored.
    async fn update(&self, entity: &E) -> Result<E, ApiError>;

    async fn remove(&self, id: &str) -> Result<(), ApiError>;
}
