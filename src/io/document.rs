use crate::error::{ExportError, ImportError};
use crate::model::WorkflowTree;
use chrono::Utc;

/// Serializes the tree as the pretty-printed id→node JSON document used for
/// export and save.
pub fn to_document(tree: &WorkflowTree) -> Result<String, ExportError> {
    serde_json::to_string_pretty(tree).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Parses a workflow document. Anything that does not deserialize into the
/// id→node shape is a [`ImportError::Parse`]; invariant checking is the
/// caller's concern.
pub fn parse_document(document: &str) -> Result<WorkflowTree, ImportError> {
    serde_json::from_str(document).map_err(|e| ImportError::Parse(e.to_string()))
}

/// Export filename convention: `workflow_<ISO-date>.json`.
pub fn export_file_name() -> String {
    format!("workflow_{}.json", Utc::now().format("%Y-%m-%d"))
}
