use indexmap::IndexMap;

use crate::error::FeedError;
use crate::feed::{FeedSnapshot, HitFeed};
use crate::types::{QueryResponse, ResponseScope};

/// Independent feeds for every scope a host reads.
///
/// Each scope gets its own [`HitFeed`], created the first time a response
/// is merged for it; feeds never share accumulated state. Hosts that only
/// ever read one scope can hold a [`HitFeed`] directly and resolve
/// responses with [`QueryResponse::select`] themselves.
#[derive(Debug, Clone)]
pub struct FeedRegistry<H> {
    feeds: IndexMap<ResponseScope, HitFeed<H>>,
}

impl<H> FeedRegistry<H> {
    /// Create a registry without any feeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            feeds: IndexMap::new(),
        }
    }

    /// Lookup the feed accumulating for the given scope.
    #[must_use]
    pub fn feed(&self, scope: &ResponseScope) -> Option<&HitFeed<H>> {
        self.feeds.get(scope)
    }

    /// Number of scopes a response has been merged for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Returns `true` when no response has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Returns `true` if a feed exists for the given scope.
    #[must_use]
    pub fn contains_scope(&self, scope: &ResponseScope) -> bool {
        self.feeds.contains_key(scope)
    }
}

impl<H: Clone> FeedRegistry<H> {
    /// Resolve the response against the scope and fold the addressed page
    /// into that scope's feed.
    ///
    /// # Errors
    ///
    /// Fails when the scope cannot be resolved against the response; see
    /// [`QueryResponse::select`]. The scope's feed is left untouched in
    /// that case.
    pub fn merge(
        &mut self,
        response: QueryResponse<H>,
        scope: &ResponseScope,
    ) -> Result<FeedSnapshot<H>, FeedError> {
        let page = response.into_page(scope)?;
        let feed = self.feeds.entry(scope.clone()).or_default();
        Ok(feed.merge(page))
    }
}

impl<H> Default for FeedRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
