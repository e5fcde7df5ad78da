use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::types::ResultPage;

/// A query execution's result delivery, in either of the two shapes the
/// query layer produces: a lone page, or one page per named collection
/// when the search is federated across several of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse<H> {
    Single(ResultPage<H>),
    Collections(BTreeMap<String, ResultPage<H>>),
}

/// Which part of a [`QueryResponse`] a consumer reads.
///
/// Resolved once at the boundary, before any page reaches a feed; the
/// merge algorithm itself never branches on response shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseScope {
    /// Single-collection mode: the response carries exactly one page.
    Main,
    /// Federated mode: read the page recorded under this collection name.
    Collection(String),
}

impl ResponseScope {
    /// Scope addressing a named collection of a federated response.
    #[must_use]
    pub fn collection(name: impl Into<String>) -> Self {
        Self::Collection(name.into())
    }
}

impl<H> QueryResponse<H> {
    /// Resolve the page this scope addresses.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingCollection`] when a federated response
    /// lacks the addressed collection, and [`FeedError::ScopeMismatch`]
    /// when the scope and the response shape disagree.
    pub fn select(&self, scope: &ResponseScope) -> Result<&ResultPage<H>, FeedError> {
        match (self, scope) {
            (Self::Single(page), ResponseScope::Main) => Ok(page),
            (Self::Collections(pages), ResponseScope::Collection(name)) => pages
                .get(name)
                .ok_or_else(|| FeedError::MissingCollection { name: name.clone() }),
            _ => Err(FeedError::ScopeMismatch {
                scope: scope.clone(),
            }),
        }
    }

    /// Consume the response, yielding the page this scope addresses.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`QueryResponse::select`].
    pub fn into_page(self, scope: &ResponseScope) -> Result<ResultPage<H>, FeedError> {
        match (self, scope) {
            (Self::Single(page), ResponseScope::Main) => Ok(page),
            (Self::Collections(mut pages), ResponseScope::Collection(name)) => pages
                .remove(name)
                .ok_or_else(|| FeedError::MissingCollection { name: name.clone() }),
            (_, scope) => Err(FeedError::ScopeMismatch {
                scope: scope.clone(),
            }),
        }
    }
}

impl<H> From<ResultPage<H>> for QueryResponse<H> {
    fn from(page: ResultPage<H>) -> Self {
        Self::Single(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32) -> ResultPage<&'static str> {
        ResultPage::new(vec!["a", "b"], page, 2, 3)
    }

    #[test]
    fn main_scope_selects_single_page() {
        let response = QueryResponse::Single(page(0));
        let selected = response.select(&ResponseScope::Main).expect("page selected");
        assert_eq!(selected.page, 0);
    }

    #[test]
    fn collection_scope_selects_named_page() {
        let response = QueryResponse::Collections(BTreeMap::from([
            ("first".to_string(), page(0)),
            ("second".to_string(), page(1)),
        ]));

        let selected = response
            .select(&ResponseScope::collection("second"))
            .expect("page selected");
        assert_eq!(selected.page, 1);
    }

    #[test]
    fn missing_collection_is_reported() {
        let response =
            QueryResponse::Collections(BTreeMap::from([("first".to_string(), page(0))]));

        let error = response
            .select(&ResponseScope::collection("second"))
            .expect_err("missing collection fails");
        assert_eq!(
            error,
            FeedError::MissingCollection {
                name: "second".to_string()
            }
        );
    }

    #[test]
    fn mismatched_scope_is_reported() {
        let single = QueryResponse::Single(page(0));
        let error = single
            .select(&ResponseScope::collection("first"))
            .expect_err("collection scope on a single response fails");
        assert!(matches!(error, FeedError::ScopeMismatch { .. }));

        let federated =
            QueryResponse::Collections(BTreeMap::from([("first".to_string(), page(0))]));
        let error = federated
            .select(&ResponseScope::Main)
            .expect_err("main scope on a federated response fails");
        assert!(matches!(error, FeedError::ScopeMismatch { .. }));
    }

    #[test]
    fn deserializes_both_response_shapes() {
        let single: QueryResponse<serde_json::Value> = serde_json::from_str(
            r#"{"hits": [{}], "page": 0, "hitsPerPage": 2, "nbPages": 3}"#,
        )
        .expect("single shape deserializes");
        assert!(matches!(single, QueryResponse::Single(_)));

        let federated: QueryResponse<serde_json::Value> = serde_json::from_str(
            r#"{"second": {"hits": [{}], "page": 0, "hitsPerPage": 2, "nbPages": 3}}"#,
        )
        .expect("federated shape deserializes");
        assert!(matches!(federated, QueryResponse::Collections(_)));
    }
}
