use serde::Serialize;

use crate::types::Hit;

/// What a merge hands to the render layer: the full accumulated hit list
/// and whether another page can still be requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot<H> {
    pub hits: Vec<Hit<H>>,
    pub has_more: bool,
}

impl<H> FeedSnapshot<H> {
    /// Number of hits accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns `true` when the feed has not accumulated any hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
