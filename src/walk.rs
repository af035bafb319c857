//! Greedy highest-value walkers
//!
//! Both walkers build a path by repeatedly stepping to the outgoing neighbor
//! whose named attribute has the strictly largest integer value. Ties keep
//! the first edge encountered in adjacency order, and the comparison starts
//! from `i64::MIN`, so a step is only taken toward a node that actually
//! carries the attribute.
//!
//! The constrained variant additionally consults the allow/deny filters for
//! every candidate edge, short-circuits as soon as an eligible edge reaches
//! the goal node, and enforces a whole-or-nothing depth bound: a walk that
//! trips the bound returns an entirely empty result, not a truncated prefix.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::error::{Result, WalkError};
use crate::filter::{eligible, WalkConfig, WalkFilters};
use crate::graph::{Edge, Node, NodeId, PropertyGraph};

/// Result of [`basic_walk`]: visited nodes in traversal order, root excluded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicWalk {
    pub nodes: Vec<Node>,
}

/// Result of [`advanced_walk`]
///
/// `edges` is the accepted path in traversal order; consecutive edges chain
/// (`edges[i].target == edges[i + 1].source`). `nodes` maps every node on the
/// accepted path, the root included and the goal included when reached. Both
/// are empty when the depth bound was tripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedWalk {
    pub edges: Vec<Edge>,
    pub nodes: HashMap<NodeId, Node>,
}

impl AdvancedWalk {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            nodes: HashMap::new(),
        }
    }
}

/// Decision taken at one node of the constrained walk
#[derive(Debug)]
enum Step {
    /// An eligible edge reaches the goal; take it and stop
    GoalReached(Edge),
    /// Best-valued eligible neighbor; take the edge and continue
    Advance(Edge),
    /// No eligible neighbor carries the attribute; keep what was accumulated
    DeadEnd,
    /// Depth gate fired; the whole accumulated path is invalid
    DepthExceeded,
}

/// Unconstrained greedy walk from `root`.
///
/// At each node, steps to the outgoing neighbor with the strictly greatest
/// value of `attribute`, skipping neighbors that do not carry it. Stops when
/// no neighbor qualifies. No filtering, no depth bound, no cycle guard; on a
/// cyclic graph the walk may not terminate, callers needing bounded execution
/// use [`advanced_walk`] with a depth limit.
pub fn basic_walk(graph: &PropertyGraph, root: NodeId, attribute: &str) -> Result<BasicWalk> {
    if attribute.is_empty() {
        return Err(WalkError::InvalidInput("attribute name is empty".into()));
    }
    if !graph.contains_node(root) {
        return Err(WalkError::NodeNotFound(root));
    }
    debug!(root, attribute, "starting basic walk");

    let mut nodes: Vec<Node> = Vec::new();
    let mut current = root;
    loop {
        let mut best: Option<&Node> = None;
        let mut max_value = i64::MIN;
        for edge in graph.outgoing(current) {
            let destination = graph
                .node(edge.target)
                .ok_or(WalkError::NodeNotFound(edge.target))?;
            if let Some(value) = destination.int_property(attribute) {
                if value > max_value {
                    best = Some(destination);
                    max_value = value;
                }
            }
        }
        match best {
            Some(destination) => {
                trace!(from = current, to = destination.id, value = max_value, "advancing");
                current = destination.id;
                nodes.push(destination.clone());
            }
            None => break,
        }
    }

    debug!(steps = nodes.len(), "basic walk finished");
    Ok(BasicWalk { nodes })
}

/// Constrained greedy walk from `root` toward `goal`.
///
/// Candidate edges must pass the allow/deny filters in `config`. The first
/// eligible edge whose destination is `goal` is taken immediately, regardless
/// of any neighbor's attribute value. `max_depth` bounds the number of
/// accepted edges; the gate is checked on node entry, before expansion, so a
/// bound of 0 yields an empty result for every graph, and tripping the bound
/// discards the entire accumulated path.
pub fn advanced_walk(
    graph: &PropertyGraph,
    root: NodeId,
    goal: NodeId,
    attribute: &str,
    config: &WalkConfig,
) -> Result<AdvancedWalk> {
    if attribute.is_empty() {
        return Err(WalkError::InvalidInput("attribute name is empty".into()));
    }
    let root_node = graph.node(root).ok_or(WalkError::NodeNotFound(root))?;
    if !graph.contains_node(goal) {
        return Err(WalkError::NodeNotFound(goal));
    }

    let filters = config.filters();
    let max_depth = config.max_depth.unwrap_or(u64::MAX);
    debug!(root, goal, attribute, max_depth, "starting advanced walk");

    let mut edges: Vec<Edge> = Vec::new();
    let mut nodes: HashMap<NodeId, Node> = HashMap::new();
    nodes.insert(root, root_node.clone());

    let mut current = root;
    loop {
        let depth = edges.len() as u64;
        match next_step(graph, current, goal, attribute, &filters, depth, max_depth)? {
            Step::GoalReached(edge) => {
                let goal_node = graph
                    .node(edge.target)
                    .ok_or(WalkError::NodeNotFound(edge.target))?;
                nodes.insert(goal_node.id, goal_node.clone());
                edges.push(edge);
                debug!(steps = edges.len(), "goal reached");
                return Ok(AdvancedWalk { edges, nodes });
            }
            Step::Advance(edge) => {
                let destination = graph
                    .node(edge.target)
                    .ok_or(WalkError::NodeNotFound(edge.target))?;
                trace!(from = current, to = destination.id, "advancing");
                current = destination.id;
                nodes.insert(destination.id, destination.clone());
                edges.push(edge);
            }
            Step::DeadEnd => {
                debug!(steps = edges.len(), "dead end, keeping accumulated path");
                return Ok(AdvancedWalk { edges, nodes });
            }
            Step::DepthExceeded => {
                debug!(max_depth, "depth bound tripped, discarding path");
                return Ok(AdvancedWalk::empty());
            }
        }
    }
}

/// Evaluate one node of the constrained walk.
///
/// `depth` counts edges accepted so far. The depth gate fires on entry: a
/// node entered at `depth == max_depth` could only extend the path to
/// `max_depth + 1` edges, so the scan is not even started. This matches the
/// reference contract: a 4-edge goal path succeeds with a bound of 4 and is
/// wholly discarded with a bound of 3.
fn next_step(
    graph: &PropertyGraph,
    current: NodeId,
    goal: NodeId,
    attribute: &str,
    filters: &WalkFilters,
    depth: u64,
    max_depth: u64,
) -> Result<Step> {
    if depth >= max_depth {
        return Ok(Step::DepthExceeded);
    }

    let mut best: Option<&Edge> = None;
    let mut max_value = i64::MIN;
    for edge in graph.outgoing(current) {
        let destination = graph
            .node(edge.target)
            .ok_or(WalkError::NodeNotFound(edge.target))?;
        if !eligible(edge, destination, filters) {
            continue;
        }
        if destination.id == goal {
            // First eligible goal edge wins; the value comparison is skipped.
            return Ok(Step::GoalReached(edge.clone()));
        }
        if let Some(value) = destination.int_property(attribute) {
            if value > max_value {
                best = Some(edge);
                max_value = value;
            }
        }
    }

    Ok(match best {
        Some(edge) => Step::Advance(edge.clone()),
        None => Step::DeadEnd,
    })
}
