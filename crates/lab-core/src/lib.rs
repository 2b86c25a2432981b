//! Core types for the AI Learning Lab: the decision tree activity.
//!
//! A [`DecisionTree`] is an arena of yes/no nodes grown one attachment at a
//! time. A [`TreePlayer`] walks it from the root, and a
//! [`DecisionTreeSession`] ties the two together with build and play modes.

/// The yes/no edge label.
pub mod branch;
/// Error types used throughout the crate.
pub mod error;
/// Node identifiers, node data, and attachment specs.
pub mod node;
/// Traversal state machine and the path log.
pub mod player;
/// Indented text rendering of a tree.
pub mod render;
/// Build/play session wrapping a tree and a player.
pub mod session;
/// The arena-backed decision tree.
pub mod tree;

/// Re-export the branch label.
pub use branch::Branch;
/// Re-export error types.
pub use error::{LabError, LabResult};
/// Re-export node types.
pub use node::{Node, NodeId, NodeSpec};
/// Re-export player types.
pub use player::{PathStep, PlayState, TreePlayer};
/// Re-export session types.
pub use session::{DecisionTreeSession, Mode};
/// Re-export tree types.
pub use tree::{DecisionTree, NodeSnapshot, TreeSnapshot};
