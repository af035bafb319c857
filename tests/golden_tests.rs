//! Golden tests - fixture-based tests that lock expected behavior
//!
//! The fixtures encode the reference scenario matrix for both walkers on the
//! shared A..DS graph: filter combinations (single string and list forms,
//! allow and deny, both axes, mixed), depth bounds around the qualifying path
//! length, and the goal short-circuit. Any change in walk behavior shows up
//! as a fixture mismatch.
//!
//! Run with: cargo test --test golden_tests

use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use ridgeline::{advanced_walk, basic_walk, Edge, Node, NodeId, PropertyGraph, WalkConfig};

/// Route walk tracing into the captured test output; `RUST_LOG` controls
/// verbosity, repeated calls are no-ops
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// FIXTURE SCHEMA
// ============================================================================

#[derive(Debug, Deserialize)]
struct NodeFixture {
    name: String,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

/// (source name, target name, relationship type)
type EdgeFixture = (String, String, String);

#[derive(Debug, Deserialize)]
struct GraphFixture {
    nodes: Vec<NodeFixture>,
    edges: Vec<EdgeFixture>,
}

/// Graph plus name <-> id mappings; fixtures reference nodes by name
struct TestGraph {
    graph: PropertyGraph,
    ids: HashMap<String, NodeId>,
    names: HashMap<NodeId, String>,
}

impl TestGraph {
    fn build(fixture: &GraphFixture) -> Self {
        let mut graph = PropertyGraph::new();
        let mut ids = HashMap::new();
        let mut names = HashMap::new();

        for (index, node) in fixture.nodes.iter().enumerate() {
            let id = (index + 1) as NodeId;
            ids.insert(node.name.clone(), id);
            names.insert(id, node.name.clone());
            let mut built = Node::new(id);
            built.labels = node.labels.clone();
            built.properties = node.properties.clone();
            graph.add_node(built);
        }
        // Edge ids follow fixture order, which is the adjacency scan order
        for (index, (source, target, rel_type)) in fixture.edges.iter().enumerate() {
            let edge = Edge::new((index + 1) as i64, rel_type.clone(), ids[source], ids[target]);
            graph.add_edge(edge).expect("fixture edge endpoints must exist");
        }

        Self { graph, ids, names }
    }

    fn id(&self, name: &str) -> NodeId {
        self.ids[name]
    }

    fn name(&self, id: NodeId) -> &str {
        &self.names[&id]
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(file: &str) -> T {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), file);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path, e))
}

// ============================================================================
// ADVANCED WALK GOLDEN TESTS
// ============================================================================

mod advanced_walk_golden {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize)]
    struct TestCase {
        name: String,
        config: serde_json::Value,
        expected_edges: Vec<EdgeFixture>,
        expected_nodes: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Fixture {
        graph: GraphFixture,
        test_cases: Vec<TestCase>,
    }

    #[test]
    fn test_advanced_walk_golden() {
        init_tracing();
        let fixture: Fixture = load_fixture("advanced_walk.json");
        let test_graph = TestGraph::build(&fixture.graph);

        for case in fixture.test_cases {
            let config = WalkConfig::from_json(case.config.clone())
                .unwrap_or_else(|e| panic!("case '{}': bad config: {}", case.name, e));
            let walk = advanced_walk(
                &test_graph.graph,
                test_graph.id("A"),
                test_graph.id("DS"),
                "sens_value",
                &config,
            )
            .unwrap_or_else(|e| panic!("case '{}': walk failed: {}", case.name, e));

            let edges: Vec<EdgeFixture> = walk
                .edges
                .iter()
                .map(|e| {
                    (
                        test_graph.name(e.source).to_string(),
                        test_graph.name(e.target).to_string(),
                        e.rel_type.clone(),
                    )
                })
                .collect();
            assert_eq!(edges, case.expected_edges, "case '{}': edge path", case.name);

            let mut node_names: Vec<String> = walk
                .nodes
                .keys()
                .map(|id| test_graph.name(*id).to_string())
                .collect();
            node_names.sort();
            assert_eq!(
                node_names, case.expected_nodes,
                "case '{}': node registry",
                case.name
            );
        }
    }

    /// The node registry holds the actual node objects, not just ids
    #[test]
    fn test_registry_contains_full_nodes() {
        init_tracing();
        let fixture: Fixture = load_fixture("advanced_walk.json");
        let test_graph = TestGraph::build(&fixture.graph);

        let walk = advanced_walk(
            &test_graph.graph,
            test_graph.id("A"),
            test_graph.id("DS"),
            "sens_value",
            &WalkConfig::new(),
        )
        .unwrap();

        let x = &walk.nodes[&test_graph.id("X")];
        assert!(x.has_label("BlackList"));
        assert_eq!(x.int_property("sens_value"), Some(100));
    }
}

// ============================================================================
// BASIC WALK GOLDEN TESTS
// ============================================================================

mod basic_walk_golden {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize)]
    struct TestCase {
        name: String,
        root: String,
        attribute: String,
        expected_nodes: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Fixture {
        graph: GraphFixture,
        test_cases: Vec<TestCase>,
    }

    #[test]
    fn test_basic_walk_golden() {
        init_tracing();
        let fixture: Fixture = load_fixture("basic_walk.json");
        let test_graph = TestGraph::build(&fixture.graph);

        for case in fixture.test_cases {
            let walk = basic_walk(&test_graph.graph, test_graph.id(&case.root), &case.attribute)
                .unwrap_or_else(|e| panic!("case '{}': walk failed: {}", case.name, e));

            let names: Vec<String> = walk
                .nodes
                .iter()
                .map(|n| test_graph.name(n.id).to_string())
                .collect();
            assert_eq!(names, case.expected_nodes, "case '{}'", case.name);
        }
    }
}
