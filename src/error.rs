use thiserror::Error;

use crate::types::ResponseScope;

/// Errors surfaced at the boundary between the query layer and a feed.
///
/// Accumulation itself is total: once a page has been addressed and
/// resolved, merging never fails. Everything here is a defect in how the
/// host wired its addressing or UI state, reported immediately instead of
/// being silently defaulted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// A federated response did not contain the addressed collection.
    #[error("query response has no collection named '{name}'")]
    MissingCollection { name: String },

    /// The addressing mode does not match the shape of the response.
    #[error("scope {scope:?} does not match the shape of the query response")]
    ScopeMismatch { scope: ResponseScope },

    /// The caller-held page cursor carried text that is not a numeral.
    #[error("page cursor value '{value}' is not a numeral")]
    InvalidPageCursor { value: String },
}
