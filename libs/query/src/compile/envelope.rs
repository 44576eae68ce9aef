//! Bounding-box (envelope) filter compilation.
//!
//! An envelope whose north-east longitude is numerically less than its
//! south-west longitude spans the antimeridian (±180°). Elasticsearch
//! `geo_shape` envelopes cannot express a wrapped box, so such a box is
//! split at the dateline into two non-wrapping halves combined with `or`.

use serde_json::{json, Value};
use tracing::debug;

use crate::request::{Corners, EnvelopeFilter};

const WEST_EDGE: f64 = -180.0;
const EAST_EDGE: f64 = 180.0;
const SOUTH_EDGE: f64 = -90.0;
const NORTH_EDGE: f64 = 90.0;

/// Fully-defaulted corner coordinates.
///
/// `Copy` matters here: splitting a wrapped box builds two independent
/// values, so constructing one half can never observe the other's edits.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    swlat: f64,
    swlng: f64,
    nelat: f64,
    nelng: f64,
}

impl Bounds {
    /// Default missing corners to the full-sphere extremes. A filter with
    /// no corners at all is invalid and yields `None`.
    fn from_corners(corners: &Corners) -> Option<Self> {
        if corners.is_empty() {
            return None;
        }
        Some(Self {
            swlat: corners.swlat.unwrap_or(SOUTH_EDGE),
            swlng: corners.swlng.unwrap_or(WEST_EDGE),
            nelat: corners.nelat.unwrap_or(NORTH_EDGE),
            nelng: corners.nelng.unwrap_or(EAST_EDGE),
        })
    }

    fn crosses_antimeridian(&self) -> bool {
        self.nelng < self.swlng
    }
}

/// Compile an envelope filter into a `geo_shape` clause, or an `or` of two
/// such clauses when the box crosses the antimeridian. Returns `None` when
/// the filter carries no corner values at all.
pub(crate) fn compile(filter: &EnvelopeFilter) -> Option<Value> {
    let Some(bounds) = Bounds::from_corners(&filter.corners) else {
        debug!(field = %filter.field, "dropping envelope filter with no corner values");
        return None;
    };
    Some(clause(&filter.field, bounds))
}

fn clause(field: &str, bounds: Bounds) -> Value {
    if bounds.crosses_antimeridian() {
        // Both halves are non-wrapping by construction, so the recursion
        // bottoms out after exactly one level.
        let eastern = Bounds {
            nelng: EAST_EDGE,
            ..bounds
        };
        let western = Bounds {
            swlng: WEST_EDGE,
            ..bounds
        };
        return json!({ "or": [clause(field, eastern), clause(field, western)] });
    }

    json!({
        "geo_shape": {
            field: {
                "shape": {
                    "type": "envelope",
                    "coordinates": [
                        [bounds.swlng, bounds.swlat],
                        [bounds.nelng, bounds.nelat]
                    ]
                }
            }
        }
    })
}
