//! Shared-value similarity predicate
//!
//! Companion utility to the walkers: decides whether two nodes share at least
//! one value drawn from a scalar-or-list property on each side. No traversal
//! logic, just value comparison.

use serde_json::Value;

use crate::graph::Node;

/// True when `a_prop` on `a` and `b_prop` on `b` have at least one value in
/// common. A JSON array counts as a set of values, a scalar as a singleton;
/// a node lacking its property never matches.
pub fn shares_property_value(a_prop: &str, a: &Node, b_prop: &str, b: &Node) -> bool {
    let (Some(left), Some(right)) = (a.properties.get(a_prop), b.properties.get(b_prop)) else {
        return false;
    };

    match (left, right) {
        (Value::Array(left), Value::Array(right)) => left.iter().any(|v| right.contains(v)),
        (Value::Array(left), scalar) => left.contains(scalar),
        (scalar, Value::Array(right)) => right.contains(scalar),
        (left, right) => left == right,
    }
}
