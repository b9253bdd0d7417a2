//! Record types managed by the console.
//!
//! Products and users share one shape of lifecycle: a draft (no id) is
//! submitted, the API assigns an id, and from then on the record is
//! addressed by that id. The [`Entity`] trait captures that shape so the
//! client, the store and the mock server can be written once.

mod id;
mod product;
mod user;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use id::IdGenerator;
pub use product::{Product, ProductDraft};
pub use user::{Role, Status, User, UserDraft};

/// A record with a server-assigned string id.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The record without its id, as submitted on create.
    type Draft: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection path segment, e.g. `products`.
    const RESOURCE: &'static str;

    /// Human-readable singular name used in messages, e.g. `Product`.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Attach an id to a draft.
    fn from_draft(id: String, draft: Self::Draft) -> Self;
}
