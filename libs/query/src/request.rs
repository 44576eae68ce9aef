//! Search request model.
//!
//! A [`SearchRequest`] is the application-level description of a search:
//! field conditions, structured filters, pagination, sort, field selection
//! and highlighting. Values typically arrive as JSON from an HTTP query
//! string or body, so construction is deliberately lenient: any field of the
//! wrong shape degrades to its default instead of failing. Shape decisions
//! (scalar vs. list vs. sub-document, envelope vs. pass-through filter) are
//! made once here, so the compiler can dispatch on tagged unions.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

/// Default number of hits per page.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Upper bound on hits per page; larger requests are clamped.
pub const MAX_PER_PAGE: u32 = 200;

/// Application-level search request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// Field conditions, ANDed together, in request order (from `where`).
    pub wheres: Vec<(String, Condition)>,
    /// Non-scoring filters, in request order (from `filters`).
    pub filters: Vec<Filter>,
    /// 1-based page number. `None` (or zero, or garbage) means page 1.
    pub page: Option<u32>,
    /// Hits per page (from `per_page`). Clamped to [`MAX_PER_PAGE`] at
    /// compile time.
    pub per_page: Option<u32>,
    /// Engine-native sort specification, passed through verbatim.
    pub sort: Option<Value>,
    /// Engine-native field selection, passed through verbatim.
    pub fields: Option<Value>,
    /// Engine-native highlight specification, passed through verbatim.
    pub highlight: Option<Value>,
}

/// One `where` condition, classified by JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A single value; compiles to a `match` clause.
    Scalar(Value),
    /// A list of values; compiles to a `terms` clause.
    List(Vec<Value>),
    /// An engine-native sub-clause (e.g. a `range` expression) supplied by
    /// the caller; compiled verbatim under the field name.
    Document(Map<String, Value>),
}

impl Condition {
    /// Classify a JSON value into its condition shape.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(values) => Self::List(values),
            Value::Object(doc) => Self::Document(doc),
            other => Self::Scalar(other),
        }
    }
}

/// One entry of the `filters` sequence.
///
/// Filters are single-key objects. The key `envelope` marks a geospatial
/// bounding-box filter; anything else is assumed to already be a valid
/// engine-native filter clause and passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Geospatial bounding-box filter, compiled to a `geo_shape` clause.
    Envelope(EnvelopeFilter),
    /// Pass-through engine-native filter clause.
    Raw { key: String, body: Value },
}

/// A bounding-box filter on a geo-shape field.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeFilter {
    /// Indexed geo-shape field the box applies to.
    pub field: String,
    /// Corner values as supplied; missing corners default at compile time.
    pub corners: Corners,
}

/// South-west / north-east corner coordinates of a bounding box.
///
/// All four values are optional; a corner counts as present even when it is
/// exactly zero. Values may arrive as JSON numbers or numeric strings
/// (query-string input), so both are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Corners {
    pub swlat: Option<f64>,
    pub swlng: Option<f64>,
    pub nelat: Option<f64>,
    pub nelng: Option<f64>,
}

impl Corners {
    /// True when none of the four corner values were supplied.
    pub fn is_empty(&self) -> bool {
        self.swlat.is_none() && self.swlng.is_none() && self.nelat.is_none() && self.nelng.is_none()
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            swlat: obj.get("swlat").and_then(coordinate),
            swlng: obj.get("swlng").and_then(coordinate),
            nelat: obj.get("nelat").and_then(coordinate),
            nelng: obj.get("nelng").and_then(coordinate),
        }
    }
}

/// Read a coordinate from a JSON number or numeric string.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl EnvelopeFilter {
    /// Parse the body of an `envelope` filter: `{ field: { swlat, .. } }`.
    ///
    /// Only the first field of the body is considered. Returns `None` when
    /// the body is not an object with at least one field.
    fn from_value(body: &Value) -> Option<Self> {
        let obj = body.as_object()?;
        let (field, opts) = obj.iter().next()?;
        let corners = match opts.as_object() {
            Some(opts) => Corners::from_object(opts),
            None => Corners::default(),
        };
        Some(Self {
            field: field.clone(),
            corners,
        })
    }
}

impl Filter {
    /// Parse one filter entry. Anything that is not a single-key object is
    /// invalid and yields `None`.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.len() != 1 {
            return None;
        }
        let (key, body) = obj.iter().next()?;
        if key == "envelope" {
            return EnvelopeFilter::from_value(body).map(Self::Envelope);
        }
        Some(Self::Raw {
            key: key.clone(),
            body: body.clone(),
        })
    }
}

impl SearchRequest {
    /// Build a request from an arbitrary JSON value.
    ///
    /// Total: malformed pieces are dropped (with a debug log) rather than
    /// reported, so any JSON input yields a usable request.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let wheres = match obj.get("where") {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(field, v)| (field.clone(), Condition::classify(v.clone())))
                .collect(),
            Some(other) if !other.is_null() => {
                debug!(?other, "ignoring non-object `where`");
                Vec::new()
            }
            _ => Vec::new(),
        };

        let filters = match obj.get("filters") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| {
                    let filter = Filter::from_value(entry);
                    if filter.is_none() {
                        debug!(?entry, "dropping malformed filter entry");
                    }
                    filter
                })
                .collect(),
            Some(other) if !other.is_null() => {
                debug!(?other, "ignoring non-array `filters`");
                Vec::new()
            }
            _ => Vec::new(),
        };

        Self {
            wheres,
            filters,
            page: obj.get("page").and_then(positive_int),
            per_page: obj.get("per_page").and_then(positive_int),
            sort: obj.get("sort").filter(|v| !v.is_null()).cloned(),
            fields: obj.get("fields").filter(|v| !v.is_null()).cloned(),
            highlight: obj.get("highlight").filter(|v| !v.is_null()).cloned(),
        }
    }
}

/// Read a positive integer from a JSON number or numeric string.
/// Zero and negative values count as absent.
fn positive_int(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|&n| n > 0)
}

impl<'de> Deserialize<'de> for SearchRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
