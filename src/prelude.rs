//! Prelude module for convenient imports
//!
//! Re-exports the types most embedders need: the store and its options, the
//! tree model, the error taxonomies, and the frontend collaborator traits.

// Store and history
pub use crate::store::{HistoryLog, HistoryPolicy, StoreOptions, WorkflowStore};

// Tree model
pub use crate::model::{Node, NodeId, NodeType, START_ID, WorkflowTree};

// Document helpers
pub use crate::io::{export_file_name, parse_document, to_document};

// Frontend collaborators
pub use crate::io::{DiagnosticSink, ExportSink, FileSource, Notifier, Prompter};

// Error types
pub use crate::error::{ExportError, ImportError, InvariantViolation, WorkflowError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
