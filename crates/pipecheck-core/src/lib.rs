//! Core pipeline graph types and DAG validation for pipecheck.
//!
//! This crate provides everything the parse endpoint needs, with no I/O:
//!
//! - [`PipelineData`], [`NodeRecord`] and [`EdgeRecord`] — the submitted payload
//! - [`NodeId`] — opaque, hashable node identifier
//! - [`PipelineGraph`] — directed graph built from a payload
//! - [`PipelineSummary`] — the counts and acyclicity flag returned to clients
//! - [`ParseError`] — error type for malformed records
//!
//! # Example
//!
//! ```rust
//! use pipecheck_core::{analyze, PipelineData};
//!
//! let data: PipelineData = serde_json::from_str(r#"{
//!     "nodes": [{"id": "input-1"}, {"id": "llm-1"}],
//!     "edges": [{"source": "input-1", "target": "llm-1"}]
//! }"#).unwrap();
//!
//! let summary = analyze(&data).unwrap();
//! assert_eq!(summary.num_nodes, 2);
//! assert_eq!(summary.num_edges, 1);
//! assert!(summary.is_dag);
//! ```

mod error;
mod graph;
mod id;
mod record;

pub use error::{ParseError, RecordKind};
pub use graph::PipelineGraph;
pub use id::NodeId;
pub use record::{EdgeRecord, NodeRecord, PipelineData};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of parsing a pipeline.
///
/// Counts are the raw lengths of the submitted sequences, not the number of
/// distinct vertices or arcs in the built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

/// Builds the graph for `data` and reports its counts and acyclicity.
pub fn analyze(data: &PipelineData) -> Result<PipelineSummary, ParseError> {
    let graph = PipelineGraph::build(data)?;
    debug!(
        "Built graph with {} vertices and {} arcs",
        graph.vertex_count(),
        graph.arc_count()
    );

    Ok(PipelineSummary {
        num_nodes: data.nodes.len(),
        num_edges: data.edges.len(),
        is_dag: graph.is_dag(),
    })
}
