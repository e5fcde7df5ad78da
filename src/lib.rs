//! Accumulates paginated search results into a single stable, ever-growing
//! hit list for infinite-scroll rendering.
//!
//! The crate sits between a query layer that executes searches and a render
//! layer that displays them: each delivered [`ResultPage`] is folded into a
//! [`HitFeed`], which deduplicates re-deliveries, stamps every hit with its
//! global rank and the query execution that produced it, and reports whether
//! more pages remain. [`PageCursor`] advances the caller-owned "load more"
//! counter, and [`FeedRegistry`] keeps independent feeds per collection when
//! searches are federated.

pub mod error;
pub mod feed;
pub mod types;

pub use error::FeedError;
pub use feed::{FeedRegistry, FeedSnapshot, HitFeed, PageCursor};
pub use types::{Hit, QueryResponse, ResponseScope, ResultPage};
