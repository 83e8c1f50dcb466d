//! The workflow store: owns the live tree, applies mutations, and keeps the
//! undo/redo history.

use crate::error::{ExportError, ImportError, WorkflowError};
use crate::io::{self, DiagnosticSink, ExportSink, FileSource, Notifier, Prompter};
use crate::model::{self, Node, NodeId, NodeType, WorkflowTree};

mod history;

pub use history::{HistoryLog, HistoryPolicy};

/// Message shown before a reset is applied.
const RESET_PROMPT: &str = "Are you sure you want to reset the workflow? This cannot be undone.";

/// Tunable store behavior.
///
/// The defaults are the hardened choices: imported documents are validated
/// against the tree invariants, and label edits stay outside the undo log
/// (see [`HistoryPolicy`]). Set `validate_imports` to `false` to accept any
/// well-shaped document the way the original editor did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub history: HistoryPolicy,
    pub validate_imports: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            history: HistoryPolicy::default(),
            validate_imports: true,
        }
    }
}

/// Owns a [`WorkflowTree`] and its [`HistoryLog`], and exposes the operation
/// contract the presentation layer drives.
///
/// Every mutation checks its preconditions before touching the tree, so a
/// failed operation never leaves a partially applied state observable.
pub struct WorkflowStore {
    tree: WorkflowTree,
    history: HistoryLog,
    options: StoreOptions,
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowStore {
    /// Creates a store holding the initial single-start tree.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let tree = WorkflowTree::new();
        Self {
            history: HistoryLog::new(tree.clone()),
            tree,
            options,
        }
    }

    /// Read-only view of the current tree.
    pub fn tree(&self) -> &WorkflowTree {
        &self.tree
    }

    /// Keyed lookup into the current tree.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.tree.get(id)
    }

    /// Read-only view of the undo/redo log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Creates a node of `node_type` beneath `parent_id` and returns its
    /// freshly generated id. The new node gets the default label for its type
    /// and is appended after the parent's existing children.
    ///
    /// Only `Action`, `Branch`, and `End` nodes can be added; a tree has
    /// exactly one start node for its whole lifetime.
    pub fn add_node(
        &mut self,
        parent_id: &str,
        node_type: NodeType,
    ) -> Result<NodeId, WorkflowError> {
        if node_type == NodeType::Start {
            return Err(WorkflowError::InvalidNodeType(node_type));
        }
        if !self.tree.contains(parent_id) {
            return Err(WorkflowError::NotFound {
                node_id: parent_id.to_string(),
            });
        }
        let id = model::fresh_id(&self.tree);
        self.tree.insert_under(parent_id, Node::new(id.clone(), node_type))?;
        self.history.commit(self.tree.clone());
        Ok(id)
    }

    /// Deletes `node_id` with splice-out semantics: its children are promoted
    /// into its parent's children list, after the parent's remaining ones.
    ///
    /// Deleting the start node is a silent no-op with no history entry.
    /// A missing id is [`WorkflowError::NotFound`]; a non-start node without
    /// a parent is [`WorkflowError::Integrity`] and leaves the tree as it
    /// was.
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), WorkflowError> {
        match self.tree.get(node_id) {
            None => {
                return Err(WorkflowError::NotFound {
                    node_id: node_id.to_string(),
                });
            }
            Some(node) if node.node_type == NodeType::Start => return Ok(()),
            Some(_) => {}
        }
        self.tree.splice_out(node_id)?;
        self.history.commit(self.tree.clone());
        Ok(())
    }

    /// Replaces `node_id`'s label. Whether the edit lands in the undo log is
    /// governed by [`HistoryPolicy::record_label_edits`]; with the default
    /// policy the live tree changes while the snapshot at the cursor does
    /// not, so a later undo/redo reverts structure only.
    pub fn update_node_label(&mut self, node_id: &str, label: &str) -> Result<(), WorkflowError> {
        self.tree.set_label(node_id, label)?;
        if self.options.history.record_label_edits {
            self.history.commit(self.tree.clone());
        }
        Ok(())
    }

    /// Steps back one snapshot. Returns whether the tree changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.tree = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Steps forward one snapshot. Returns whether the tree changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.tree = snapshot.clone();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Serializes the current tree as a document.
    pub fn export_document(&self) -> Result<String, ExportError> {
        io::to_document(&self.tree)
    }

    /// Serializes the current tree and hands it to `sink` under the
    /// `workflow_<ISO-date>.json` filename. Returns the filename used.
    pub fn export_workflow(&self, sink: &mut dyn ExportSink) -> Result<String, ExportError> {
        let document = self.export_document()?;
        let file_name = io::export_file_name();
        sink.write_document(&file_name, &document)
            .map_err(|message| ExportError::Sink {
                file_name: file_name.clone(),
                message,
            })?;
        Ok(file_name)
    }

    /// Parses `document` and replaces the current tree wholesale, committing
    /// the imported tree to history. With `validate_imports` on (the
    /// default), documents violating the tree invariants are rejected.
    /// On any failure the current state is left untouched.
    pub fn import_document(&mut self, document: &str) -> Result<(), ImportError> {
        let tree = io::parse_document(document)?;
        if self.options.validate_imports {
            tree.validate()?;
        }
        self.tree = tree;
        self.history.commit(self.tree.clone());
        Ok(())
    }

    /// Boundary wrapper around [`import_document`](Self::import_document):
    /// reads the picked file and surfaces failures as a user notification
    /// instead of propagating them. Returns whether the import was applied.
    pub fn import_workflow(
        &mut self,
        source: &mut dyn FileSource,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let document = match source.read_to_string() {
            Ok(document) => document,
            Err(message) => {
                notifier.notify(&format!("Could not read workflow file: {}", message));
                return false;
            }
        };
        match self.import_document(&document) {
            Ok(()) => true,
            Err(e) => {
                notifier.notify(&format!("Invalid workflow file: {}", e));
                false
            }
        }
    }

    /// Replaces the tree with the initial single-start state and clears the
    /// history to one snapshot. The caller is expected to have confirmed
    /// this with the user already.
    pub fn reset_workflow(&mut self) {
        self.tree = WorkflowTree::new();
        self.history.reset(self.tree.clone());
    }

    /// Prompts for confirmation and resets only on a yes. Returns whether
    /// the reset was applied.
    pub fn reset_with_confirmation(&mut self, prompter: &mut dyn Prompter) -> bool {
        if prompter.confirm(RESET_PROMPT) {
            self.reset_workflow();
            true
        } else {
            false
        }
    }

    /// Dumps the current tree to the diagnostic sink between banner lines
    /// and notifies the user. No state change.
    pub fn save_workflow(
        &self,
        diagnostics: &mut dyn DiagnosticSink,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ExportError> {
        let document = self.export_document()?;
        diagnostics.emit("=== WORKFLOW DATA ===");
        diagnostics.emit(&document);
        diagnostics.emit("=== END WORKFLOW DATA ===");
        notifier.notify("Workflow saved to the diagnostic log.");
        Ok(())
    }
}
