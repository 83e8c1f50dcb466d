use crate::model::NodeType;
use thiserror::Error;

/// Errors that can occur while mutating the workflow tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Node '{node_id}' not found in the workflow tree")]
    NotFound { node_id: String },

    #[error("Nodes of type '{0}' cannot be added beneath an existing node")]
    InvalidNodeType(NodeType),

    #[error(
        "Node '{node_id}' has no parent; the tree no longer forms a well-formed hierarchy"
    )]
    Integrity { node_id: String },
}

/// A single violation of the workflow tree invariants, as reported by
/// [`WorkflowTree::validate`](crate::model::WorkflowTree::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Expected exactly one start node, found {0}")]
    StartCount(usize),

    #[error("Map key '{key}' does not match the node's own id '{node_id}'")]
    IdMismatch { key: String, node_id: String },

    #[error("Node '{parent}' references child '{child}', which does not exist")]
    DanglingChild { parent: String, child: String },

    #[error("Node '{child}' is referenced as a child by more than one parent")]
    MultipleParents { child: String },

    #[error("The start node '{0}' must not have a parent")]
    StartHasParent(String),

    #[error("Node '{0}' is not reachable from the start node")]
    Unreachable(String),
}

/// Errors that can occur when importing a serialized workflow document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Failed to parse workflow document: {0}")]
    Parse(String),

    #[error("Imported workflow violates tree invariants: {0}")]
    InvalidWorkflow(#[from] InvariantViolation),
}

/// Errors that can occur when exporting or saving the current workflow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to serialize workflow: {0}")]
    Serialize(String),

    #[error("Export sink rejected '{file_name}': {message}")]
    Sink { file_name: String, message: String },
}
