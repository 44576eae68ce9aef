//! Search query compilation for an Elasticsearch-style engine.
//!
//! Translates an application-level [`SearchRequest`] — equality, array and
//! range conditions, structured filters, geospatial bounding boxes,
//! pagination, sort and field selection — into the engine's native query
//! document ([`CompiledQuery`]):
//! - scalar / list / sub-document conditions map to `match` / `terms` /
//!   pass-through clauses under `bool.must`
//! - filters compose into a non-scoring `filtered` stage
//! - bounding boxes that cross the antimeridian are split at ±180° into an
//!   `or` of two non-wrapping `geo_shape` envelopes
//!
//! The compiler is permissive by design: malformed input is dropped (and
//! debug-logged) rather than reported, so compilation always produces a
//! query document.
//!
//! # Example
//!
//! ```
//! use marlin_query::SearchRequest;
//! use serde_json::json;
//!
//! let request = SearchRequest::from_value(&json!({
//!     "where": { "taxon_id": [1, 2, 3] },
//!     "page": 2,
//!     "per_page": 50
//! }));
//! let compiled = request.compile();
//! assert_eq!(compiled.size, 50);
//! assert_eq!(compiled.from, 50);
//! ```

pub mod compile;
pub mod request;

pub use compile::{compile, CompiledQuery};
pub use request::{
    Condition, Corners, EnvelopeFilter, Filter, SearchRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
