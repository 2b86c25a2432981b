//! Walks a decision tree from the root, one yes/no answer at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::Branch;
use crate::error::{LabError, LabResult};
use crate::node::{Node, NodeId};
use crate::tree::DecisionTree;

/// Where a playthrough currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// At a question, waiting for an answer.
    AtNode(NodeId),
    /// Landed on a result. Terminal.
    AtLeaf(NodeId),
    /// The chosen branch had nothing attached. Terminal.
    Stuck,
}

impl PlayState {
    /// Whether no further answers are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::AtNode(_))
    }

    /// The node the cursor rests on, if any.
    pub fn node(self) -> Option<NodeId> {
        match self {
            Self::AtNode(id) | Self::AtLeaf(id) => Some(id),
            Self::Stuck => None,
        }
    }
}

/// One answered question in the path log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathStep {
    /// The question that was answered.
    pub question: String,
    /// The branch taken.
    pub choice: Branch,
    /// Glyph of the question node.
    pub emoji: String,
    /// When the answer was given.
    pub at: DateTime<Utc>,
}

/// Traversal cursor plus the append-only path log of one playthrough.
#[derive(Debug, Clone)]
pub struct TreePlayer {
    state: PlayState,
    path: Vec<PathStep>,
    started_at: DateTime<Utc>,
}

impl TreePlayer {
    /// Start a playthrough at the root of `tree` with an empty log.
    pub fn new(tree: &DecisionTree) -> Self {
        let root = tree.root_node();
        let state = if root.is_leaf() {
            PlayState::AtLeaf(root.id)
        } else {
            PlayState::AtNode(root.id)
        };
        Self {
            state,
            path: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Current state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Answers given so far, oldest first.
    pub fn path(&self) -> &[PathStep] {
        &self.path
    }

    /// When this playthrough began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The node under the cursor.
    pub fn current<'t>(&self, tree: &'t DecisionTree) -> Option<&'t Node> {
        self.state.node().and_then(|id| tree.get(id))
    }

    /// The result reached, if the playthrough ended on a leaf.
    pub fn result<'t>(&self, tree: &'t DecisionTree) -> Option<&'t Node> {
        match self.state {
            PlayState::AtLeaf(id) => tree.get(id),
            _ => None,
        }
    }

    /// Answer the current question and move along `branch`.
    ///
    /// Only accepted while at a question node; terminal states reject the
    /// answer and leave the log untouched.
    pub fn choose(&mut self, tree: &DecisionTree, branch: Branch) -> LabResult<PlayState> {
        let PlayState::AtNode(current_id) = self.state else {
            return Err(LabError::PlaythroughOver);
        };
        let current = tree.node(current_id)?;
        if current.is_leaf() {
            return Err(LabError::PlaythroughOver);
        }

        self.path.push(PathStep {
            question: current.label.clone(),
            choice: branch,
            emoji: current.emoji.clone(),
            at: Utc::now(),
        });

        self.state = match current.child(branch).and_then(|id| tree.get(id)) {
            None => PlayState::Stuck,
            Some(next) if next.is_leaf() => PlayState::AtLeaf(next.id),
            Some(next) => PlayState::AtNode(next.id),
        };
        debug!(question = %current.label, %branch, state = ?self.state, "choice made");
        Ok(self.state)
    }

    /// Follow a whole list of answers, stopping at the first rejection.
    pub fn choose_all(
        &mut self,
        tree: &DecisionTree,
        branches: impl IntoIterator<Item = Branch>,
    ) -> LabResult<PlayState> {
        for branch in branches {
            self.choose(tree, branch)?;
        }
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeSpec;

    #[test]
    fn starts_at_root_with_empty_log() {
        let tree = DecisionTree::sample();
        let player = TreePlayer::new(&tree);
        assert_eq!(player.state(), PlayState::AtNode(tree.root()));
        assert!(player.path().is_empty());
    }

    #[test]
    fn yes_yes_lands_on_dog() {
        let tree = DecisionTree::sample();
        let mut player = TreePlayer::new(&tree);

        let state = player.choose(&tree, Branch::Yes).unwrap();
        assert!(matches!(state, PlayState::AtNode(_)));
        let state = player.choose(&tree, Branch::Yes).unwrap();
        assert!(matches!(state, PlayState::AtLeaf(_)));

        let result = player.result(&tree).unwrap();
        assert_eq!(result.result.as_deref(), Some("It's a Dog!"));
        assert_eq!(result.result_emoji.as_deref(), Some("🐶"));
    }

    #[test]
    fn path_log_records_questions_and_choices() {
        let tree = DecisionTree::sample();
        let mut player = TreePlayer::new(&tree);
        player.choose_all(&tree, [Branch::No, Branch::Yes]).unwrap();

        let steps: Vec<_> = player
            .path()
            .iter()
            .map(|s| (s.question.as_str(), s.choice, s.emoji.as_str()))
            .collect();
        assert_eq!(
            steps,
            [
                ("Is it a living thing?", Branch::No, "🌱"),
                ("Is it electronic?", Branch::Yes, "⚡"),
            ]
        );
        assert_eq!(
            player.result(&tree).and_then(|n| n.result.as_deref()),
            Some("It's a Computer!")
        );
    }

    #[test]
    fn missing_branch_gets_stuck() {
        let mut tree = DecisionTree::new();
        let root = tree.root();
        tree.attach(root, Branch::Yes, NodeSpec::question("Does it have fur?", "🐾"))
            .unwrap();

        let mut player = TreePlayer::new(&tree);
        let state = player.choose(&tree, Branch::No).unwrap();
        assert_eq!(state, PlayState::Stuck);
        assert!(state.is_terminal());
        assert!(player.current(&tree).is_none());
        assert_eq!(player.path().len(), 1);
    }

    #[test]
    fn terminal_states_reject_choices() {
        let mut tree = DecisionTree::new();
        let root = tree.root();
        tree.attach(root, Branch::Yes, NodeSpec::result("Dog", "🐶"))
            .unwrap();

        let mut player = TreePlayer::new(&tree);
        player.choose(&tree, Branch::Yes).unwrap();
        let err = player.choose(&tree, Branch::Yes).unwrap_err();
        assert!(matches!(err, LabError::PlaythroughOver));
        assert_eq!(player.path().len(), 1);

        let mut stuck = TreePlayer::new(&tree);
        stuck.choose(&tree, Branch::No).unwrap();
        assert!(stuck.choose(&tree, Branch::Yes).is_err());
        assert_eq!(stuck.path().len(), 1);
    }

    #[test]
    fn same_answers_same_outcome() {
        let tree = DecisionTree::sample();
        let outcomes: Vec<_> = (0..5)
            .map(|_| {
                let mut player = TreePlayer::new(&tree);
                player.choose_all(&tree, [Branch::Yes, Branch::No]).unwrap()
            })
            .collect();
        assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
    }
}
