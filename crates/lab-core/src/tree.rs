use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::Branch;
use crate::error::{LabError, LabResult};
use crate::node::{Node, NodeId, NodeSpec};

/// Question every fresh tree starts with.
pub const DEFAULT_ROOT_QUESTION: &str = "Is it a living thing?";

/// Glyph of the default root.
pub const DEFAULT_ROOT_EMOJI: &str = "🌱";

/// An arena of yes/no nodes with a root that always exists.
///
/// Branches are stored as child IDs, and every node except the root is
/// created already bound to exactly one empty parent slot, so the structure
/// can never contain a cycle or a shared child.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,

    // Index
    parents: HashMap<NodeId, (NodeId, Branch)>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Create a tree holding only the default root question.
    pub fn new() -> Self {
        Self::with_root(NodeSpec::question(DEFAULT_ROOT_QUESTION, DEFAULT_ROOT_EMOJI))
    }

    /// Create a tree with a custom root question.
    pub fn with_root(spec: NodeSpec) -> Self {
        let root = Node::from_spec(NodeSpec {
            is_leaf: false,
            ..spec
        });
        let id = root.id;
        let mut nodes = HashMap::new();
        nodes.insert(id, root);
        Self {
            nodes,
            root: id,
            parents: HashMap::new(),
        }
    }

    /// The "Quick Start" example: living things and objects, four results.
    pub fn sample() -> Self {
        let mut tree = Self::new();
        let root = tree.root();
        // Fresh tree, every slot below is empty.
        let fur = tree
            .attach(root, Branch::Yes, NodeSpec::question("Does it have fur?", "🐾"))
            .ok();
        let electronic = tree
            .attach(root, Branch::No, NodeSpec::question("Is it electronic?", "⚡"))
            .ok();
        if let Some(fur) = fur {
            let _ = tree.attach(
                fur,
                Branch::Yes,
                NodeSpec::result("Dog", "🐶").with_result_text("It's a Dog!"),
            );
            let _ = tree.attach(
                fur,
                Branch::No,
                NodeSpec::result("Snake", "🐍").with_result_text("It's a Snake!"),
            );
        }
        if let Some(electronic) = electronic {
            let _ = tree.attach(
                electronic,
                Branch::Yes,
                NodeSpec::result("Computer", "💻").with_result_text("It's a Computer!"),
            );
            let _ = tree.attach(
                electronic,
                Branch::No,
                NodeSpec::result("Rock", "🪨").with_result_text("It's a Rock!"),
            );
        }
        tree
    }

    /// ID of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root node.
    pub fn root_node(&self) -> &Node {
        // The root is inserted at construction and never removed.
        &self.nodes[&self.root]
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get a node by ID or fail with `NodeNotFound`.
    pub fn node(&self, id: NodeId) -> LabResult<&Node> {
        self.nodes.get(&id).ok_or(LabError::NodeNotFound(id))
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always has its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parent and edge of a node; `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Option<(NodeId, Branch)> {
        self.parents.get(&id).copied()
    }

    /// Whether play mode has anything to walk.
    pub fn is_playable(&self) -> bool {
        self.root_node().has_children()
    }

    /// Attach a new node to an empty branch slot of `parent`.
    ///
    /// Fails when the label is blank, the parent is missing or a result, or
    /// the slot is already occupied.
    pub fn attach(&mut self, parent: NodeId, branch: Branch, spec: NodeSpec) -> LabResult<NodeId> {
        if spec.label.trim().is_empty() {
            return Err(LabError::EmptyLabel);
        }

        let parent_node = self
            .nodes
            .get(&parent)
            .ok_or(LabError::NodeNotFound(parent))?;
        if parent_node.is_leaf() {
            return Err(LabError::LeafHasNoBranches(parent));
        }
        if parent_node.child(branch).is_some() {
            return Err(LabError::BranchOccupied { parent, branch });
        }

        let node = Node::from_spec(spec);
        let id = node.id;
        debug!(%parent, %branch, node = %id, leaf = node.is_leaf(), label = %node.label, "attach node");

        self.nodes.insert(id, node);
        self.parents.insert(id, (parent, branch));
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            *parent_node.slot_mut(branch) = Some(id);
        }
        Ok(id)
    }

    /// Node IDs in pre-order (node, then its yes subtree, then its no subtree).
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            out.push(id);
            // Push "no" first so "yes" is visited first.
            if let Some(no) = node.child(Branch::No) {
                stack.push(no);
            }
            if let Some(yes) = node.child(Branch::Yes) {
                stack.push(yes);
            }
        }
        out
    }

    /// Every empty branch slot on a question node, in pre-order.
    pub fn open_slots(&self) -> Vec<(NodeId, Branch)> {
        self.preorder()
            .into_iter()
            .filter_map(|id| self.nodes.get(&id))
            .filter(|node| !node.is_leaf())
            .flat_map(|node| {
                Branch::ALL
                    .into_iter()
                    .filter(|b| node.child(*b).is_none())
                    .map(move |b| (node.id, b))
            })
            .collect()
    }

    /// Number of levels, counting the root as 1.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, id: NodeId) -> usize {
        match self.nodes.get(&id) {
            Some(node) => {
                1 + Branch::ALL
                    .into_iter()
                    .filter_map(|b| node.child(b))
                    .map(|child| self.depth_from(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// All result nodes, in pre-order.
    pub fn leaves(&self) -> Vec<&Node> {
        self.preorder()
            .into_iter()
            .filter_map(|id| self.nodes.get(&id))
            .filter(|n| n.is_leaf())
            .collect()
    }

    /// A nested, serializable copy of the tree for display.
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            node_count: self.nodes.len(),
            depth: self.depth(),
            root: self.snapshot_node(self.root_node()),
        }
    }

    fn snapshot_node(&self, node: &Node) -> NodeSnapshot {
        let child = |b: Branch| {
            node.child(b)
                .and_then(|id| self.nodes.get(&id))
                .map(|n| Box::new(self.snapshot_node(n)))
        };
        NodeSnapshot {
            id: node.id,
            label: node.label.clone(),
            emoji: node.emoji.clone(),
            is_leaf: node.is_leaf(),
            result: node.result.clone(),
            result_emoji: node.result_emoji.clone(),
            yes: child(Branch::Yes),
            no: child(Branch::No),
        }
    }
}

/// Read-only nested view of a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Total number of nodes.
    pub node_count: usize,
    /// Number of levels.
    pub depth: usize,
    /// The root and everything below it.
    pub root: NodeSnapshot,
}

/// One node of a [`TreeSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node identifier.
    pub id: NodeId,
    /// Question or result text.
    pub label: String,
    /// Display glyph.
    pub emoji: String,
    /// Whether this node is a result.
    pub is_leaf: bool,
    /// Classification text (leaves only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Classification glyph (leaves only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_emoji: Option<String>,
    /// Subtree under the "yes" edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes: Option<Box<NodeSnapshot>>,
    /// Subtree under the "no" edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no: Option<Box<NodeSnapshot>>,
}
