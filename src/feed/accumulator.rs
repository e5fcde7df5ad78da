use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, trace};

use crate::feed::FeedSnapshot;
use crate::types::{Hit, ResultPage};

/// What a feed retains of a delivered page: the payloads plus the
/// geometry needed to recompute positions on every merge.
#[derive(Debug, Clone)]
struct RecordedPage<H> {
    hits: Vec<H>,
    hits_per_page: u32,
    query_id: Option<String>,
}

/// Accumulated result history for one consumer instance.
///
/// Each delivered page is recorded under its index, first delivery wins,
/// and nothing is ever evicted for the lifetime of the feed. Pages are
/// kept in the order they were first seen, which defines the order of the
/// concatenated hit list; under the expected usage pattern of strictly
/// increasing page indices this coincides with numeric order.
///
/// A feed is addressed to exactly one collection. Hosts reading several
/// collections out of federated responses keep one feed per collection
/// (see [`FeedRegistry`](crate::FeedRegistry)); those feeds never share
/// state.
#[derive(Debug, Clone)]
pub struct HitFeed<H> {
    pages: IndexMap<u32, RecordedPage<H>>,
}

impl<H> HitFeed<H> {
    /// Create an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
        }
    }

    /// Number of distinct pages recorded so far.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of accumulated hits.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.pages.values().map(|page| page.hits.len()).sum()
    }

    /// Returns `true` when no page has been delivered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns `true` if a page has been recorded under this index.
    #[must_use]
    pub fn contains_page(&self, page: u32) -> bool {
        self.pages.contains_key(&page)
    }
}

impl<H: Clone> HitFeed<H> {
    /// Fold a delivered page into the feed and return the full annotated
    /// history along with whether more pages remain.
    ///
    /// A page index seen before leaves the recorded history untouched,
    /// whatever the new delivery carries; the delivery still refreshes
    /// `has_more`, since its own `total_pages` is the latest word on how
    /// many pages exist. Positions are recomputed from each recorded
    /// page's own geometry, so a `hits_per_page` change between pages
    /// shifts later positions without renumbering earlier ones.
    pub fn merge(&mut self, page: ResultPage<H>) -> FeedSnapshot<H> {
        let has_more = page.has_more();

        match self.pages.entry(page.page) {
            Entry::Occupied(_) => {
                trace!("ignoring re-delivery of page {}", page.page);
            }
            Entry::Vacant(slot) => {
                debug!("recording page {} with {} hits", page.page, page.hits.len());
                slot.insert(RecordedPage {
                    hits: page.hits,
                    hits_per_page: page.hits_per_page,
                    query_id: page.query_id,
                });
            }
        }

        FeedSnapshot {
            hits: self.annotated_hits(),
            has_more,
        }
    }

    /// Concatenate all recorded pages in first-seen order, stamping each
    /// hit with its global rank and the producing query's identifier.
    fn annotated_hits(&self) -> Vec<Hit<H>> {
        let mut hits = Vec::with_capacity(self.hit_count());
        for (&index, recorded) in &self.pages {
            let base = u64::from(index) * u64::from(recorded.hits_per_page);
            for (offset, payload) in recorded.hits.iter().enumerate() {
                hits.push(Hit {
                    position: base + offset as u64 + 1,
                    query_id: recorded.query_id.clone(),
                    payload: payload.clone(),
                });
            }
        }
        hits
    }
}

impl<H> Default for HitFeed<H> {
    fn default() -> Self {
        Self::new()
    }
}
