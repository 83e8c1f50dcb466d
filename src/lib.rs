//! # Flowtree - Workflow Tree State Management
//!
//! **Flowtree** is the state-management core of a visual workflow editor: a
//! flat, id-keyed arena of typed nodes (`start`, `action`, `branch`, `end`)
//! with ordered child lists, splice-out deletes, a linear undo/redo history
//! of full snapshots, and a JSON document format for export and import.
//!
//! The crate deliberately contains no presentation code. The GUI (or CLI, or
//! test harness) drives the [`store::WorkflowStore`] through its operation
//! contract and supplies the outward-facing collaborators — file sink, file
//! picker, confirmation prompt, notifications — as small traits defined in
//! [`io::frontend`].
//!
//! ## Quick Start
//!
//! ```rust
//! use flowtree::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut store = WorkflowStore::new();
//!
//!     // Build start -> review -> gate.
//!     let review = store.add_node(START_ID, NodeType::Action)?;
//!     store.update_node_label(&review, "Review request")?;
//!     let gate = store.add_node(&review, NodeType::Branch)?;
//!
//!     // Deleting an interior node promotes its children a level up.
//!     store.delete_node(&review)?;
//!     assert_eq!(store.node(START_ID).unwrap().children, vec![gate.clone()]);
//!
//!     // Mutations are undoable; the history is linear.
//!     assert!(store.undo());
//!     assert!(store.node(&review).is_some());
//!     assert!(store.redo());
//!     assert!(store.node(&review).is_none());
//!
//!     // The document format round-trips.
//!     let document = store.export_document()?;
//!     store.import_document(&document)?;
//!     assert_eq!(store.node(START_ID).unwrap().children, vec![gate]);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod prelude;
pub mod store;
