//! Import dependency graph.
//!
//! A direct one-hop edge list built from per-file import lists. No cycle
//! detection and no transitive closure: downstream visualization wants
//! the declared edges, not a resolved dependency order.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;
use smol_str::SmolStr;

/// A graph node: a parsed file or an imported module name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// Edge kinds. Only imports are modeled today; includes stay in the
/// per-file metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Import,
}

/// A directed edge from an importing file to an imported module name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// The aggregated dependency graph of a batch of documents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// Build the graph from per-file import lists.
    ///
    /// Nodes are deduplicated by id in first-seen order. Edges keep the
    /// literal import multiplicity: a file importing the same module
    /// twice yields two edges.
    pub fn build(imports_by_file: &IndexMap<String, Vec<SmolStr>>) -> Self {
        let mut graph = Self::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        fn ensure_node(graph: &mut DependencyGraph, seen: &mut FxHashSet<String>, id: &str) {
            if seen.insert(id.to_string()) {
                graph.nodes.push(GraphNode {
                    id: id.to_string(),
                    label: id.to_string(),
                });
            }
        }

        for (filename, imports) in imports_by_file {
            ensure_node(&mut graph, &mut seen, filename);
            for import in imports {
                ensure_node(&mut graph, &mut seen, import);
                graph.edges.push(GraphEdge {
                    source: filename.clone(),
                    target: import.to_string(),
                    kind: EdgeKind::Import,
                });
            }
        }

        graph
    }

    /// True if `id` is present among the nodes.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }
}
