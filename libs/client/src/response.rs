//! Engine response model.

use serde::Deserialize;
use serde_json::Value;

/// Top-level search response from the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Query time in milliseconds.
    pub took: u64,
    pub timed_out: bool,
    pub hits: Hits,
}

/// The hits section of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Hits {
    /// Total number of matching documents across all pages.
    pub total: u64,
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

/// One matching document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    /// Full document source; absent when the query selected `fields`.
    #[serde(rename = "_source")]
    pub source: Option<Value>,
    /// Selected stored fields, when the query asked for them.
    pub fields: Option<Value>,
    /// Highlighted fragments, when the query asked for highlighting.
    pub highlight: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_search_response() {
        let response: SearchResponse = serde_json::from_value(json!({
            "took": 4,
            "timed_out": false,
            "_shards": { "total": 5, "successful": 5, "failed": 0 },
            "hits": {
                "total": 2,
                "max_score": 1.2,
                "hits": [
                    {
                        "_index": "observations",
                        "_type": "observation",
                        "_id": "42",
                        "_score": 1.2,
                        "_source": { "id": 42, "quality_grade": "research" },
                        "highlight": { "description": ["a <em>bird</em>"] }
                    },
                    {
                        "_index": "observations",
                        "_type": "observation",
                        "_id": "43",
                        "_score": 0.9,
                        "fields": { "id": [43] }
                    }
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.took, 4);
        assert_eq!(response.hits.total, 2);
        assert_eq!(response.hits.hits.len(), 2);
        assert_eq!(response.hits.hits[0].id, "42");
        assert!(response.hits.hits[0].highlight.is_some());
        assert!(response.hits.hits[1].source.is_none());
    }

    #[test]
    fn tolerates_missing_sections() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.hits.total, 0);
        assert!(response.hits.hits.is_empty());
    }
}
