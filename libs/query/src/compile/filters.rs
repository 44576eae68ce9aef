//! Filter clause compilation.
//!
//! Filters are already shape-checked at the request boundary; what remains
//! here is rebuilding pass-through clauses and delegating envelopes, which
//! may still be dropped when they carry no usable corner values.

use serde_json::{json, Value};

use super::envelope;
use crate::request::Filter;

/// Compile parsed filters into engine-native filter clauses, preserving
/// input order. Envelope filters without corner values are dropped.
pub(crate) fn compile(filters: &[Filter]) -> Vec<Value> {
    filters
        .iter()
        .filter_map(|filter| match filter {
            Filter::Envelope(env) => envelope::compile(env),
            Filter::Raw { key, body } => Some(json!({ key.as_str(): body })),
        })
        .collect()
}
