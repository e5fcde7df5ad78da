use serde::{Deserialize, Serialize};

/// A single result handed to the render layer.
///
/// The payload is the record supplied by the query layer, untouched. The
/// feed attaches exactly two synthetic fields: the hit's 1-based rank
/// within the full accumulated history, and the identifier of the query
/// execution that produced it. On the wire the synthetic fields use the
/// `__position` / `__queryID` names the render ecosystem expects, with the
/// payload flattened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit<H> {
    #[serde(rename = "__position")]
    pub position: u64,
    #[serde(rename = "__queryID", default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(flatten)]
    pub payload: H,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_synthetic_fields_alongside_payload() {
        let hit = Hit {
            position: 7,
            query_id: Some("exec-1".to_string()),
            payload: json!({"title": "a"}),
        };

        let value = serde_json::to_value(&hit).expect("hit serializes");
        assert_eq!(
            value,
            json!({"__position": 7, "__queryID": "exec-1", "title": "a"})
        );
    }

    #[test]
    fn omits_absent_query_id() {
        let hit = Hit {
            position: 1,
            query_id: None,
            payload: json!({"title": "a"}),
        };

        let value = serde_json::to_value(&hit).expect("hit serializes");
        assert_eq!(value, json!({"__position": 1, "title": "a"}));
    }
}
