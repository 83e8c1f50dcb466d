use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier. Unique within a tree, generated fresh on creation,
/// never reused.
pub type NodeId = String;

/// The role a node plays in the workflow.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Action,
    Branch,
    End,
}

impl NodeType {
    /// The label a freshly created node of this type receives.
    pub fn default_label(self) -> &'static str {
        match self {
            NodeType::Start => "Start",
            NodeType::Action => "New Action",
            NodeType::Branch => "New Condition",
            NodeType::End => "End",
        }
    }

    /// Whether the editor offers to add children beneath nodes of this type.
    /// This is a policy convention, not a model invariant: an imported tree
    /// may legally carry children under an `end` node.
    pub fn allows_children(self) -> bool {
        !matches!(self, NodeType::End)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Start => "start",
            NodeType::Action => "action",
            NodeType::Branch => "branch",
            NodeType::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// A single workflow step: identity, type, user-editable label, and the
/// ordered ids of its children. Nodes are stored flatly in the tree's arena;
/// `children` holds references, not owned subtrees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Creates a node with the default label for its type and no children.
    pub fn new(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            label: node_type.default_label().to_string(),
            children: Vec::new(),
        }
    }

    /// Replaces the default label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
