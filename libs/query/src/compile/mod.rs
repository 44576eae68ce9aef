//! Query document compilation.
//!
//! Builds the engine-native query document from a [`SearchRequest`]:
//! - `where` conditions become leaf clauses under `bool.must`
//! - filters become a non-scoring `filtered.filter.bool.must` stage
//! - pagination, sort, field selection and highlighting are applied on top
//!
//! Compilation is a pure, total transformation: it never fails, never
//! performs I/O, and builds every value fresh, so it is safe to call
//! concurrently.

use serde::Serialize;
use serde_json::{json, Value};

mod envelope;
mod filters;
mod wheres;

use crate::request::{SearchRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Compiled engine-native query document.
///
/// Field order matches the wire layout of the document. `sort` and `fields`
/// are omitted when absent; `highlight` is always emitted (as `null` when
/// absent) so serialized output is stable byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// Scoring query, optionally wrapped in a `filtered` stage.
    pub query: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    /// Hits per page, clamped into `[1, MAX_PER_PAGE]`.
    pub size: u32,
    /// Offset of the first hit: `(page - 1) * size`.
    pub from: u64,
    pub highlight: Option<Value>,
}

/// Compile a search request into an engine-native query document.
pub fn compile(request: &SearchRequest) -> CompiledQuery {
    let where_clauses = wheres::compile(&request.wheres);
    let filter_clauses = filters::compile(&request.filters);

    let mut query = if where_clauses.is_empty() {
        json!({ "match_all": {} })
    } else {
        json!({ "bool": { "must": where_clauses } })
    };

    // A non-empty filter stage wraps the scoring query in a filtered block.
    if !filter_clauses.is_empty() {
        query = json!({
            "filtered": {
                "query": query,
                "filter": { "bool": { "must": filter_clauses } }
            }
        });
    }

    // Parsing already rejects zero values, but the fields are public, so
    // clamp here as well to keep the [1, MAX_PER_PAGE] invariant.
    let per_page = request
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);
    let page = request.page.unwrap_or(1).max(1);

    CompiledQuery {
        query,
        sort: request.sort.clone(),
        fields: request.fields.clone(),
        size: per_page,
        from: u64::from(page - 1) * u64::from(per_page),
        highlight: request.highlight.clone(),
    }
}

impl SearchRequest {
    /// Compile this request into an engine-native query document.
    pub fn compile(&self) -> CompiledQuery {
        compile(self)
    }
}
