//! In-memory property-graph snapshot
//!
//! The walkers run against an externally owned, read-only snapshot: nodes
//! with labels and a property map, directed typed edges. Per-node outgoing
//! adjacency preserves edge insertion order; tie-breaking and the goal scan
//! in [`crate::walk`] depend on that order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{Result, WalkError};

/// Stable node identifier, unique within a graph
pub type NodeId = i64;

/// Stable edge identifier, unique within a graph
pub type EdgeId = i64;

/// Graph vertex with identity, labels, and a key-value property map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Labels, unordered, may be empty
    #[serde(default)]
    pub labels: Vec<String>,
    /// Property map; a given key may be absent on any node
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: HashMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Integer value of a property, if present and integral.
    ///
    /// Walk attributes are read through this accessor: a property that is
    /// missing or not an integer does not qualify the node as a candidate.
    pub fn int_property(&self, key: &str) -> Option<i64> {
        self.properties.get(key).and_then(Value::as_i64)
    }
}

/// Directed, typed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub rel_type: String,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(id: EdgeId, rel_type: impl Into<String>, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            rel_type: rel_type.into(),
            source,
            target,
        }
    }
}

/// Read-only graph snapshot the walkers traverse
///
/// Built once by the caller, never mutated during a walk. Outgoing edges of
/// a node iterate in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct PropertyGraph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    /// Outgoing edge ids per source node, in insertion order
    adjacency: HashMap<NodeId, Vec<EdgeId>>,
}

impl PropertyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node.id).or_default();
        self.nodes.insert(node.id, node);
    }

    /// Add a directed edge. Both endpoints must already be present.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.nodes.contains_key(&edge.source) {
            return Err(WalkError::NodeNotFound(edge.source));
        }
        if !self.nodes.contains_key(&edge.target) {
            return Err(WalkError::NodeNotFound(edge.target));
        }
        self.adjacency.entry(edge.source).or_default().push(edge.id);
        self.edges.insert(edge.id, edge);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Outgoing edges of `id`, in insertion order
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(move |edge_id| self.edges.get(edge_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
