use serde::{Deserialize, Serialize};

/// One page of search results as returned by a single query execution.
///
/// Field names on the wire follow the query service's JSON shape
/// (`hitsPerPage`, `nbPages`, `queryID`). The hit payload `H` is opaque:
/// the feed never inspects it, only carries it through to the render
/// layer.
///
/// Caller contract: `hits_per_page >= 1` and `total_pages >= 1`. The
/// `hits` list may be empty, and `page` may start above zero when a
/// session resumes from an externally cached state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<H> {
    pub hits: Vec<H>,
    /// Zero-based index of this page within the query's result set.
    pub page: u32,
    pub hits_per_page: u32,
    /// Total page count as known at the time this page was produced.
    #[serde(rename = "nbPages")]
    pub total_pages: u32,
    /// Identifier of the query execution that produced this page.
    /// Absent until the query service assigns one.
    #[serde(rename = "queryID", default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

impl<H> ResultPage<H> {
    /// Build a page from its hits and geometry.
    #[must_use]
    pub fn new(hits: Vec<H>, page: u32, hits_per_page: u32, total_pages: u32) -> Self {
        Self {
            hits,
            page,
            hits_per_page,
            total_pages,
            query_id: None,
        }
    }

    /// Attach the identifier of the query execution that produced this page.
    #[must_use]
    pub fn with_query_id(mut self, query_id: impl Into<String>) -> Self {
        self.query_id = Some(query_id.into());
        self
    }

    /// Whether pages beyond this one remain, judged by this page's own
    /// declared total. The most recent delivery is authoritative even when
    /// earlier pages declared a different total.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) + 1 < u64::from(self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_field_names() {
        let page: ResultPage<serde_json::Value> = serde_json::from_str(
            r#"{
                "hits": [{"title": "a"}, {"title": "b"}],
                "page": 1,
                "hitsPerPage": 2,
                "nbPages": 3,
                "queryID": "exec-1"
            }"#,
        )
        .expect("page deserializes");

        assert_eq!(page.hits.len(), 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.hits_per_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.query_id.as_deref(), Some("exec-1"));
    }

    #[test]
    fn query_id_is_optional() {
        let page: ResultPage<serde_json::Value> =
            serde_json::from_str(r#"{"hits": [], "page": 0, "hitsPerPage": 10, "nbPages": 1}"#)
                .expect("page without queryID deserializes");
        assert_eq!(page.query_id, None);
    }

    #[test]
    fn has_more_uses_own_total() {
        assert!(ResultPage::<()>::new(Vec::new(), 0, 2, 3).has_more());
        assert!(ResultPage::<()>::new(Vec::new(), 1, 2, 3).has_more());
        assert!(!ResultPage::<()>::new(Vec::new(), 2, 2, 3).has_more());
        assert!(!ResultPage::<()>::new(Vec::new(), 0, 2, 1).has_more());
    }
}
