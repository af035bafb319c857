//! Walk configuration and allow/deny filtering
//!
//! The caller-facing configuration mirrors the procedure-call map shape:
//! `maxDepth`, plus `nodes` / `relationships` sections each holding an
//! optional `whiteList` and `blackList`. Every list field accepts either a
//! single string or a sequence of strings. Configuration is normalized once
//! into [`WalkFilters`] before a walk starts; the walk loop never branches on
//! the scalar-or-list distinction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};
use crate::graph::{Edge, Node};

/// A single value or a sequence of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Allow/deny lists for one filtering axis (node labels or relationship types)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListFilter {
    #[serde(rename = "whiteList", default, skip_serializing_if = "Option::is_none")]
    pub white_list: Option<OneOrMany<String>>,
    #[serde(rename = "blackList", default, skip_serializing_if = "Option::is_none")]
    pub black_list: Option<OneOrMany<String>>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_white_list(mut self, values: impl Into<OneOrMany<String>>) -> Self {
        self.white_list = Some(values.into());
        self
    }

    pub fn with_black_list(mut self, values: impl Into<OneOrMany<String>>) -> Self {
        self.black_list = Some(values.into());
        self
    }
}

/// Configuration for [`crate::walk::advanced_walk`]
///
/// Absent fields impose no restriction: no depth bound, no filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Maximum number of accepted edges; unbounded if omitted
    #[serde(rename = "maxDepth", default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u64>,
    /// Node-label allow/deny lists, applied to edge destinations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<ListFilter>,
    /// Relationship-type allow/deny lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<ListFilter>,
}

impl WalkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a caller-supplied JSON configuration map.
    ///
    /// A list field that is neither a single string nor a sequence of strings
    /// is a configuration error, surfaced immediately rather than ignored.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| WalkError::Config(e.to_string()))
    }

    pub fn with_max_depth(mut self, max_depth: u64) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_node_filter(mut self, filter: ListFilter) -> Self {
        self.nodes = Some(filter);
        self
    }

    pub fn with_relationship_filter(mut self, filter: ListFilter) -> Self {
        self.relationships = Some(filter);
        self
    }

    /// Normalize into plain vectors for the walk loop
    pub fn filters(&self) -> WalkFilters {
        fn lists(filter: &Option<ListFilter>) -> (Vec<String>, Vec<String>) {
            match filter {
                Some(f) => (
                    f.white_list.clone().map(OneOrMany::into_vec).unwrap_or_default(),
                    f.black_list.clone().map(OneOrMany::into_vec).unwrap_or_default(),
                ),
                None => (Vec::new(), Vec::new()),
            }
        }
        let (node_allow, node_deny) = lists(&self.nodes);
        let (relationship_allow, relationship_deny) = lists(&self.relationships);
        WalkFilters {
            node_allow,
            node_deny,
            relationship_allow,
            relationship_deny,
        }
    }
}

/// Normalized filter lists consulted once per candidate edge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkFilters {
    pub node_allow: Vec<String>,
    pub node_deny: Vec<String>,
    pub relationship_allow: Vec<String>,
    pub relationship_deny: Vec<String>,
}

/// Whether `edge` may be traversed into `destination` under `filters`.
///
/// Pure predicate. Empty lists are permissive: an empty allow-list matches
/// every value and an empty deny-list excludes nothing. The node allow-list
/// needs any one destination label to match; a single denied label
/// disqualifies the destination.
pub fn eligible(edge: &Edge, destination: &Node, filters: &WalkFilters) -> bool {
    let relationship_ok = (filters.relationship_allow.is_empty()
        || filters.relationship_allow.contains(&edge.rel_type))
        && (filters.relationship_deny.is_empty()
            || !filters.relationship_deny.contains(&edge.rel_type));
    if !relationship_ok {
        return false;
    }

    let labels = &destination.labels;
    (filters.node_allow.is_empty() || labels.iter().any(|l| filters.node_allow.contains(l)))
        && (filters.node_deny.is_empty() || !labels.iter().any(|l| filters.node_deny.contains(l)))
}
