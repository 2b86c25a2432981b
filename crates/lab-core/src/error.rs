use crate::branch::Branch;
use crate::node::NodeId;

/// Alias for `Result<T, LabError>`.
pub type LabResult<T> = Result<T, LabError>;

/// Errors that can occur when building or playing a decision tree.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// The requested node ID does not exist in the tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A node label was empty or whitespace only.
    #[error("a node needs a question or result text")]
    EmptyLabel,

    /// The target branch slot already holds a child.
    #[error("the {branch} branch of node {parent} is already taken")]
    BranchOccupied {
        /// The parent whose slot is taken.
        parent: NodeId,
        /// The occupied branch.
        branch: Branch,
    },

    /// Result nodes end a path and cannot grow branches.
    #[error("node {0} is a result and cannot have branches")]
    LeafHasNoBranches(NodeId),

    /// Play mode needs at least one branch under the root.
    #[error("add at least one branch to the root before playing")]
    TreeNotPlayable,

    /// The operation is only available while building.
    #[error("switch back to build mode first")]
    NotInBuildMode,

    /// The operation is only available while playing.
    #[error("start playing first")]
    NotInPlayMode,

    /// The playthrough reached a result or a dead end.
    #[error("this playthrough is over")]
    PlaythroughOver,

    /// An unrecognized branch name.
    #[error("invalid branch: \"{0}\" (expected yes or no)")]
    InvalidBranch(String),
}
