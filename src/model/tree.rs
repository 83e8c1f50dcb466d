use crate::error::{InvariantViolation, WorkflowError};
use crate::model::{Node, NodeId, NodeType};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Id given to the start node of a freshly created tree.
pub const START_ID: &str = "start";

/// The workflow tree: a flat arena of nodes keyed by id, with parent→child
/// edges stored as ordered id lists on each parent.
///
/// Storing nodes flatly (rather than as nested owning structures) keeps
/// snapshots cheap to clone and sidesteps ownership cycles entirely; a child
/// id is a handle into the arena, resolved on demand.
///
/// Serializes transparently as the id→node JSON object used by the
/// export/import document format.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct WorkflowTree {
    nodes: AHashMap<NodeId, Node>,
}

impl WorkflowTree {
    /// Creates the initial tree: a single start node with no children.
    pub fn new() -> Self {
        let mut nodes = AHashMap::new();
        nodes.insert(START_ID.to_string(), Node::new(START_ID, NodeType::Start));
        Self { nodes }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// The unique start node, if the tree has one.
    pub fn start(&self) -> Option<&Node> {
        self.nodes
            .values()
            .find(|n| n.node_type == NodeType::Start)
    }

    /// The node whose children list contains `id`. For a well-formed tree
    /// this is `None` only for the start node.
    pub fn parent_of(&self, id: &str) -> Option<&Node> {
        self.nodes
            .values()
            .find(|n| n.children.iter().any(|c| c == id))
    }

    /// Inserts `node` into the arena and appends its id to `parent_id`'s
    /// children, after any existing children.
    pub(crate) fn insert_under(
        &mut self,
        parent_id: &str,
        node: Node,
    ) -> Result<(), WorkflowError> {
        let Some(parent) = self.nodes.get_mut(parent_id) else {
            return Err(WorkflowError::NotFound {
                node_id: parent_id.to_string(),
            });
        };
        parent.children.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Removes `node_id` while promoting its children to its parent: the id
    /// is dropped from the parent's children at its original position and the
    /// orphaned children are appended at the end, relative order preserved.
    ///
    /// All lookups happen before the first mutation, so a failure leaves the
    /// tree exactly as it was.
    pub(crate) fn splice_out(&mut self, node_id: &str) -> Result<(), WorkflowError> {
        let promoted = match self.nodes.get(node_id) {
            Some(node) => node.children.clone(),
            None => {
                return Err(WorkflowError::NotFound {
                    node_id: node_id.to_string(),
                });
            }
        };
        let parent_id = match self.parent_of(node_id) {
            Some(parent) => parent.id.clone(),
            None => {
                return Err(WorkflowError::Integrity {
                    node_id: node_id.to_string(),
                });
            }
        };
        let Some(parent) = self.nodes.get_mut(&parent_id) else {
            return Err(WorkflowError::Integrity {
                node_id: node_id.to_string(),
            });
        };
        parent.children.retain(|c| c != node_id);
        parent.children.extend(promoted);
        self.nodes.remove(node_id);
        Ok(())
    }

    pub(crate) fn set_label(&mut self, id: &str, label: &str) -> Result<(), WorkflowError> {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.label = label.to_string();
                Ok(())
            }
            None => Err(WorkflowError::NotFound {
                node_id: id.to_string(),
            }),
        }
    }

    /// Checks the core tree invariants: map keys match node ids, exactly one
    /// start node with no parent, no dangling child references, no node with
    /// two parents, every node reachable from start. The first violation
    /// found is returned.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (key, node) in &self.nodes {
            if *key != node.id {
                return Err(InvariantViolation::IdMismatch {
                    key: key.clone(),
                    node_id: node.id.clone(),
                });
            }
        }

        let start_ids: Vec<&NodeId> = self
            .nodes
            .values()
            .filter(|n| n.node_type == NodeType::Start)
            .map(|n| &n.id)
            .collect();
        if start_ids.len() != 1 {
            return Err(InvariantViolation::StartCount(start_ids.len()));
        }
        let start_id = start_ids[0];

        for node in self.nodes.values() {
            for child in &node.children {
                if !self.nodes.contains_key(child) {
                    return Err(InvariantViolation::DanglingChild {
                        parent: node.id.clone(),
                        child: child.clone(),
                    });
                }
                if child == start_id {
                    return Err(InvariantViolation::StartHasParent(start_id.clone()));
                }
            }
        }

        if let Some(dup) = self
            .nodes
            .values()
            .flat_map(|n| n.children.iter())
            .duplicates()
            .next()
        {
            return Err(InvariantViolation::MultipleParents { child: dup.clone() });
        }

        // With single-parent and dangling checks done, a walk from start
        // both proves reachability and rules out cycles.
        let mut seen: AHashSet<&NodeId> = AHashSet::new();
        let mut queue: Vec<&NodeId> = vec![start_id];
        while let Some(id) = queue.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(node) = self.nodes.get(id) {
                queue.extend(node.children.iter());
            }
        }
        for id in self.nodes.keys() {
            if !seen.contains(id) {
                return Err(InvariantViolation::Unreachable(id.clone()));
            }
        }

        Ok(())
    }
}
