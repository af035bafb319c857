//! Ridgeline - greedy highest-value path queries for directed property graphs
//!
//! Given a read-only graph snapshot, compute a single "best" path from a root
//! node by always stepping to the outgoing neighbor with the locally maximal
//! value of a chosen integer attribute. Two variants:
//!
//! - [`basic_walk`]: unconstrained, stops when no neighbor carries the
//!   attribute.
//! - [`advanced_walk`]: adds node-label and relationship-type allow/deny
//!   filtering, a whole-or-nothing depth bound, and early termination as soon
//!   as the goal node is directly reachable.

pub mod error;
pub mod filter;
pub mod graph;
pub mod similarity;
pub mod walk;

pub use error::{Result, WalkError};
pub use filter::{eligible, ListFilter, OneOrMany, WalkConfig, WalkFilters};
pub use graph::{Edge, EdgeId, Node, NodeId, PropertyGraph};
pub use similarity::shares_property_value;
pub use walk::{advanced_walk, basic_walk, AdvancedWalk, BasicWalk};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
