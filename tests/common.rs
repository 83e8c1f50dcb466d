//! Common test utilities for building workflow stores and documents.
use flowtree::prelude::*;

/// Builds `start -> action -> branch` and returns the two generated ids.
#[allow(dead_code)]
pub fn build_small_chain(store: &mut WorkflowStore) -> (NodeId, NodeId) {
    let action = store
        .add_node(START_ID, NodeType::Action)
        .expect("Failed to add action node");
    let branch = store
        .add_node(&action, NodeType::Branch)
        .expect("Failed to add branch node");
    (action, branch)
}

/// A well-formed document with fixed ids: `start -> a -> b`.
#[allow(dead_code)]
pub fn chain_document() -> String {
    serde_json::json!({
        "start": { "id": "start", "type": "start", "label": "Start", "children": ["a"] },
        "a": { "id": "a", "type": "action", "label": "Do the thing", "children": ["b"] },
        "b": { "id": "b", "type": "end", "label": "End", "children": [] },
    })
    .to_string()
}

/// A well-shaped document whose node `b` has two parents.
#[allow(dead_code)]
pub fn shared_child_document() -> String {
    serde_json::json!({
        "start": { "id": "start", "type": "start", "label": "Start", "children": ["a", "b"] },
        "a": { "id": "a", "type": "action", "label": "A", "children": ["b"] },
        "b": { "id": "b", "type": "end", "label": "End", "children": [] },
    })
    .to_string()
}

/// A well-shaped document with no start node at all.
#[allow(dead_code)]
pub fn startless_document() -> String {
    serde_json::json!({
        "a": { "id": "a", "type": "action", "label": "A", "children": [] },
    })
    .to_string()
}
