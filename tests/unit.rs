//! Unit tests for the node model, invariant checking, and error display.
mod common;
use flowtree::error::{InvariantViolation, WorkflowError};
use flowtree::prelude::*;

#[test]
fn test_node_type_display() {
    assert_eq!(format!("{}", NodeType::Start), "start");
    assert_eq!(format!("{}", NodeType::Action), "action");
    assert_eq!(format!("{}", NodeType::Branch), "branch");
    assert_eq!(format!("{}", NodeType::End), "end");
}

#[test]
fn test_default_labels() {
    assert_eq!(NodeType::Start.default_label(), "Start");
    assert_eq!(NodeType::Action.default_label(), "New Action");
    assert_eq!(NodeType::Branch.default_label(), "New Condition");
    assert_eq!(NodeType::End.default_label(), "End");
}

#[test]
fn test_end_nodes_do_not_offer_children() {
    assert!(NodeType::Start.allows_children());
    assert!(NodeType::Action.allows_children());
    assert!(NodeType::Branch.allows_children());
    assert!(!NodeType::End.allows_children());
}

#[test]
fn test_initial_tree_shape() {
    let tree = WorkflowTree::new();
    assert_eq!(tree.len(), 1);
    let start = tree.start().expect("initial tree has a start node");
    assert_eq!(start.id, START_ID);
    assert_eq!(start.label, "Start");
    assert!(start.children.is_empty());
    assert!(tree.validate().is_ok());
}

#[test]
fn test_validate_detects_shared_child() {
    let tree = parse_document(&common::shared_child_document()).expect("document parses");
    assert_eq!(
        tree.validate(),
        Err(InvariantViolation::MultipleParents {
            child: "b".to_string()
        })
    );
}

#[test]
fn test_validate_detects_missing_start() {
    let tree = parse_document(&common::startless_document()).expect("document parses");
    assert_eq!(tree.validate(), Err(InvariantViolation::StartCount(0)));
}

#[test]
fn test_validate_detects_dangling_child() {
    let document = serde_json::json!({
        "start": { "id": "start", "type": "start", "label": "Start", "children": ["ghost"] },
    })
    .to_string();
    let tree = parse_document(&document).expect("document parses");
    assert_eq!(
        tree.validate(),
        Err(InvariantViolation::DanglingChild {
            parent: "start".to_string(),
            child: "ghost".to_string(),
        })
    );
}

#[test]
fn test_validate_detects_id_mismatch() {
    let document = serde_json::json!({
        "start": { "id": "start", "type": "start", "label": "Start", "children": [] },
        "a": { "id": "something-else", "type": "action", "label": "A", "children": [] },
    })
    .to_string();
    let tree = parse_document(&document).expect("document parses");
    assert_eq!(
        tree.validate(),
        Err(InvariantViolation::IdMismatch {
            key: "a".to_string(),
            node_id: "something-else".to_string(),
        })
    );
}

#[test]
fn test_validate_detects_unreachable_island() {
    // `x` and `y` form a two-node loop disconnected from start.
    let document = serde_json::json!({
        "start": { "id": "start", "type": "start", "label": "Start", "children": [] },
        "x": { "id": "x", "type": "action", "label": "X", "children": ["y"] },
        "y": { "id": "y", "type": "action", "label": "Y", "children": ["x"] },
    })
    .to_string();
    let tree = parse_document(&document).expect("document parses");
    assert!(matches!(
        tree.validate(),
        Err(InvariantViolation::Unreachable(_))
    ));
}

#[test]
fn test_parent_of() {
    let mut store = WorkflowStore::new();
    let (action, branch) = common::build_small_chain(&mut store);
    let tree = store.tree();
    assert_eq!(tree.parent_of(&action).map(|n| n.id.as_str()), Some(START_ID));
    assert_eq!(tree.parent_of(&branch).map(|n| n.id.clone()), Some(action));
    assert!(tree.parent_of(START_ID).is_none());
}

#[test]
fn test_error_display() {
    let err = WorkflowError::NotFound {
        node_id: "n42".to_string(),
    };
    assert!(err.to_string().contains("n42"));

    let err = WorkflowError::Integrity {
        node_id: "orphan".to_string(),
    };
    assert!(err.to_string().contains("orphan"));

    let err = WorkflowError::InvalidNodeType(NodeType::Start);
    assert!(err.to_string().contains("start"));

    let err = ImportError::Parse("unexpected token".to_string());
    assert!(err.to_string().contains("unexpected token"));

    let err = ExportError::Sink {
        file_name: "workflow_2026-08-26.json".to_string(),
        message: "disk full".to_string(),
    };
    assert!(err.to_string().contains("workflow_2026-08-26.json"));
    assert!(err.to_string().contains("disk full"));
}
