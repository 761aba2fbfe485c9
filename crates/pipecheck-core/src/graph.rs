//! Directed graph built from a submitted pipeline.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::error::ParseError;
use crate::id::NodeId;
use crate::record::PipelineData;

/// Directed graph of a pipeline.
///
/// Duplicate node ids collapse into one vertex. Edges keep every arc,
/// including parallel arcs and self-loops, and create vertices for ids that
/// no node declared.
#[derive(Debug, Default)]
pub struct PipelineGraph {
    graph: DiGraph<NodeId, ()>,
    id_to_node: HashMap<NodeId, NodeIndex>,
}

impl PipelineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from `data`, nodes first, then edges.
    ///
    /// Stops at the first record that lacks a required field.
    pub fn build(data: &PipelineData) -> Result<Self, ParseError> {
        let mut graph = Self::new();

        for (index, node) in data.nodes.iter().enumerate() {
            graph.add_vertex(node.id(index)?);
        }

        for (index, edge) in data.edges.iter().enumerate() {
            let source = edge.source(index)?;
            let target = edge.target(index)?;
            for endpoint in [&source, &target] {
                if !graph.contains(endpoint) {
                    debug!("Edge {} references undeclared node {}", index, endpoint);
                }
            }
            graph.add_arc(source, target);
        }

        Ok(graph)
    }

    /// Returns the vertex for `id`, creating it on first use.
    pub fn add_vertex(&mut self, id: NodeId) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .id_to_node
            .entry(id.clone())
            .or_insert_with(|| graph.add_node(id))
    }

    pub fn add_arc(&mut self, source: NodeId, target: NodeId) {
        let from = self.add_vertex(source);
        let to = self.add_vertex(target);
        self.graph.add_edge(from, to, ());
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.id_to_node.contains_key(id)
    }

    /// True when the graph has no directed cycle. A self-loop is a cycle.
    pub fn is_dag(&self) -> bool {
        toposort(&self.graph, None).is_ok()
    }

    /// Vertices ordered so every arc points forward, or `None` when cyclic.
    pub fn topological_order(&self) -> Option<Vec<NodeId>> {
        let sorted = toposort(&self.graph, None).ok()?;
        Some(
            sorted
                .into_iter()
                .filter_map(|idx| self.graph.node_weight(idx))
                .cloned()
                .collect(),
        )
    }
}
