use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ParseError, RecordKind};
use crate::id::NodeId;

/// A submitted pipeline: node records and edge records in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// A node as sent by the editor. Only `id` is read; every other key
/// (`type`, `position`, `data`, ...) is carried untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRecord(pub Map<String, Value>);

/// An edge as sent by the editor. Only `source` and `target` are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeRecord(pub Map<String, Value>);

impl NodeRecord {
    /// Identifier of the node at position `index` in the payload.
    pub fn id(&self, index: usize) -> Result<NodeId, ParseError> {
        required(&self.0, RecordKind::Node, index, "id")
    }
}

impl EdgeRecord {
    /// Identifier of the node this edge leaves.
    pub fn source(&self, index: usize) -> Result<NodeId, ParseError> {
        required(&self.0, RecordKind::Edge, index, "source")
    }

    /// Identifier of the node this edge enters.
    pub fn target(&self, index: usize) -> Result<NodeId, ParseError> {
        required(&self.0, RecordKind::Edge, index, "target")
    }
}

fn required(
    fields: &Map<String, Value>,
    record: RecordKind,
    index: usize,
    field: &'static str,
) -> Result<NodeId, ParseError> {
    let value = fields
        .get(field)
        .ok_or(ParseError::MissingField { record, index, field })?;
    NodeId::from_value(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_editor_payload_deserializes() {
        let data: PipelineData = serde_json::from_value(json!({
            "nodes": [{
                "id": "customInput-1",
                "type": "customInput",
                "position": {"x": 100, "y": 200},
                "data": {"id": "customInput-1", "nodeType": "customInput"}
            }],
            "edges": [{
                "id": "reactflow__edge-customInput-1customInput-1-value-llm-1llm-1-system",
                "source": "customInput-1",
                "sourceHandle": "customInput-1-value",
                "target": "llm-1",
                "targetHandle": "llm-1-system",
                "type": "smoothstep",
                "animated": true,
                "markerEnd": {"type": "arrow", "height": "20px", "width": "20px"}
            }]
        }))
        .unwrap();

        assert_eq!(data.nodes[0].id(0).unwrap(), NodeId::from("customInput-1"));
        assert_eq!(data.edges[0].source(0).unwrap(), NodeId::from("customInput-1"));
        assert_eq!(data.edges[0].target(0).unwrap(), NodeId::from("llm-1"));
    }

    #[test]
    fn test_missing_id() {
        let node = NodeRecord(Map::new());
        assert_eq!(
            node.id(4).unwrap_err(),
            ParseError::MissingField { record: RecordKind::Node, index: 4, field: "id" }
        );
    }

    #[test]
    fn test_missing_target() {
        let edge: EdgeRecord = serde_json::from_value(json!({"source": "a"})).unwrap();
        assert!(edge.source(0).is_ok());
        assert_eq!(
            edge.target(0).unwrap_err(),
            ParseError::MissingField { record: RecordKind::Edge, index: 0, field: "target" }
        );
    }

    #[test]
    fn test_non_object_record_rejected() {
        let result = serde_json::from_value::<PipelineData>(json!({
            "nodes": ["a"],
            "edges": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_edges_rejected() {
        let result = serde_json::from_value::<PipelineData>(json!({"nodes": []}));
        assert!(result.is_err());
    }
}
