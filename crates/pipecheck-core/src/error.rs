use std::fmt;

use thiserror::Error;

/// Kind of record a [`ParseError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Node,
    Edge,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Node => f.write_str("node"),
            RecordKind::Edge => f.write_str("edge"),
        }
    }
}

/// Errors raised while turning submitted records into a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A node or edge record lacks a required key.
    #[error("{record} at index {index} is missing field '{field}'")]
    MissingField {
        record: RecordKind,
        index: usize,
        field: &'static str,
    },

    /// An identifier was a JSON array or object.
    #[error("field '{field}' must be a string, number, boolean or null, got {kind}")]
    UnhashableId {
        field: &'static str,
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ParseError::MissingField {
            record: RecordKind::Edge,
            index: 3,
            field: "target",
        };
        assert_eq!(err.to_string(), "edge at index 3 is missing field 'target'");
    }

    #[test]
    fn test_unhashable_id_message() {
        let err = ParseError::UnhashableId { field: "id", kind: "array" };
        assert_eq!(
            err.to_string(),
            "field 'id' must be a string, number, boolean or null, got array"
        );
    }
}
