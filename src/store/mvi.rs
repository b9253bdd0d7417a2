//! Intent/reducer primitives shared by the product and user slices.
//!
//! ```text
//! console command ──→ Store ──→ EntityApi
//!                       │           │
//!                       │     remote result
//!                       ↓           ↓
//!                 Reducer::reduce(state, intent) ──→ watch channel ──→ selectors
//! ```
//!
//! A store never edits its slice directly. Fetch progress, confirmed
//! mutations and favorite toggles all arrive as intents and go through one
//! reducer step each.

/// Something that changes a slice: a fetch lifecycle event, a mutation the
/// API has confirmed, or a local favorite toggle.
pub trait Intent: Send + 'static {}

/// Everything a slice holds: the collection with its loading and error
/// flags, plus favorites for products.
///
/// `Default` is the empty, idle slice a new store starts from.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Pure transition function for one slice.
///
/// No I/O happens here; the store performs the remote call first and
/// dispatches its outcome.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold `intents` over an empty slice, in order.
    fn replay(intents: impl IntoIterator<Item = Self::Intent>) -> Self::State
    where
        Self: Sized,
    {
        intents.into_iter().fold(Self::State::default(), Self::reduce)
    }
}
