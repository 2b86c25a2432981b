use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::branch::Branch;

/// Glyphs offered for question nodes.
pub const QUESTION_EMOJIS: [&str; 8] = ["❓", "🤔", "💭", "🎯", "🔍", "👀", "🌟", "💡"];

/// Glyphs offered for result nodes.
pub const RESULT_EMOJIS: [&str; 12] = [
    "🐶", "🐱", "🐍", "🦁", "🌳", "💻", "📱", "🪨", "🍕", "🍦", "⚽", "🎮",
];

/// Glyph used when none was picked.
pub const DEFAULT_EMOJI: &str = "❓";

/// Unique identifier for every node in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Generate a new random node ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What to attach: the caller-supplied part of a new node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    /// Question text, or the display text of a result.
    pub label: String,
    /// Display glyph.
    pub emoji: String,
    /// Whether the node ends a path.
    pub is_leaf: bool,
    /// Classification shown when a playthrough lands here.
    pub result: Option<String>,
    /// Glyph shown with the result.
    pub result_emoji: Option<String>,
}

impl NodeSpec {
    /// A question node that can grow yes/no branches.
    pub fn question(label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            emoji: emoji.into(),
            is_leaf: false,
            result: None,
            result_emoji: None,
        }
    }

    /// A result node whose result text and glyph mirror its label and emoji.
    pub fn result(label: impl Into<String>, emoji: impl Into<String>) -> Self {
        let label = label.into();
        let emoji = emoji.into();
        Self {
            result: Some(label.clone()),
            result_emoji: Some(emoji.clone()),
            label,
            emoji,
            is_leaf: true,
        }
    }

    /// Override the result text shown at the end of a playthrough.
    pub fn with_result_text(mut self, text: impl Into<String>) -> Self {
        if self.is_leaf {
            self.result = Some(text.into());
        }
        self
    }
}

/// One decision point or terminal classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Question text or result display text.
    pub label: String,
    /// Display glyph.
    pub emoji: String,
    is_leaf: bool,
    /// Classification text (leaves only).
    pub result: Option<String>,
    /// Classification glyph (leaves only).
    pub result_emoji: Option<String>,
    pub(crate) yes: Option<NodeId>,
    pub(crate) no: Option<NodeId>,
}

impl Node {
    /// Build a fresh, childless node from a spec.
    ///
    /// A leaf always carries a result; a missing one falls back to the
    /// node's own label and emoji.
    pub(crate) fn from_spec(spec: NodeSpec) -> Self {
        let label = spec.label.trim().to_string();
        let (result, result_emoji) = if spec.is_leaf {
            (
                Some(spec.result.unwrap_or_else(|| label.clone())),
                Some(spec.result_emoji.unwrap_or_else(|| spec.emoji.clone())),
            )
        } else {
            (None, None)
        };
        Self {
            id: NodeId::new(),
            label,
            emoji: spec.emoji,
            is_leaf: spec.is_leaf,
            result,
            result_emoji,
            yes: None,
            no: None,
        }
    }

    /// Whether this node ends a path. Fixed at creation.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// The child on the given branch, if attached.
    pub fn child(&self, branch: Branch) -> Option<NodeId> {
        match branch {
            Branch::Yes => self.yes,
            Branch::No => self.no,
        }
    }

    /// Whether at least one branch is attached.
    pub fn has_children(&self) -> bool {
        self.yes.is_some() || self.no.is_some()
    }

    pub(crate) fn slot_mut(&mut self, branch: Branch) -> &mut Option<NodeId> {
        match branch {
            Branch::Yes => &mut self.yes,
            Branch::No => &mut self.no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_display_shows_short_form() {
        let id = NodeId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn question_spec_has_no_result() {
        let node = Node::from_spec(NodeSpec::question("Does it have fur?", "🐾"));
        assert!(!node.is_leaf());
        assert!(node.result.is_none());
        assert!(!node.has_children());
    }

    #[test]
    fn result_spec_mirrors_label() {
        let spec = NodeSpec::result("Dog", "🐶");
        assert_eq!(spec.result.as_deref(), Some("Dog"));
        assert_eq!(spec.result_emoji.as_deref(), Some("🐶"));

        let spec = spec.with_result_text("It's a Dog!");
        assert_eq!(spec.result.as_deref(), Some("It's a Dog!"));
    }

    #[test]
    fn with_result_text_ignored_on_questions() {
        let spec = NodeSpec::question("Is it big?", "🤔").with_result_text("nope");
        assert!(spec.result.is_none());
    }

    #[test]
    fn question_spec_drops_stray_result() {
        let spec = NodeSpec {
            result: Some("Dog".into()),
            ..NodeSpec::question("Is it big?", "🤔")
        };
        let node = Node::from_spec(spec);
        assert!(node.result.is_none());
        assert!(node.result_emoji.is_none());
    }

    #[test]
    fn label_is_trimmed() {
        let node = Node::from_spec(NodeSpec::question("  Is it red?  ", "❓"));
        assert_eq!(node.label, "Is it red?");
    }
}
