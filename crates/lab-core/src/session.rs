//! Build/play session for the decision tree activity.
//!
//! `DecisionTreeSession` owns one tree and switches between growing it and
//! walking it. Each mode only accepts its own operations.

use tracing::info;

use crate::branch::Branch;
use crate::error::{LabError, LabResult};
use crate::node::{NodeId, NodeSpec};
use crate::player::{PathStep, PlayState, TreePlayer};
use crate::render;
use crate::tree::DecisionTree;

/// Whether the session is growing or walking the tree.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Nodes can be attached.
    Build,
    /// A playthrough is in progress.
    Play(TreePlayer),
}

/// One decision tree activity session.
#[derive(Debug, Clone)]
pub struct DecisionTreeSession {
    tree: DecisionTree,
    mode: Mode,
}

impl Default for DecisionTreeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTreeSession {
    /// A fresh session in build mode with the default root.
    pub fn new() -> Self {
        Self {
            tree: DecisionTree::new(),
            mode: Mode::Build,
        }
    }

    /// The tree being built or played.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether the session is in build mode.
    pub fn is_building(&self) -> bool {
        matches!(self.mode, Mode::Build)
    }

    /// The active playthrough, if playing.
    pub fn player(&self) -> Option<&TreePlayer> {
        match &self.mode {
            Mode::Play(player) => Some(player),
            Mode::Build => None,
        }
    }

    /// The path log of the active playthrough (empty while building).
    pub fn path(&self) -> &[PathStep] {
        self.player().map(|p| p.path()).unwrap_or(&[])
    }

    /// Attach a node while building.
    pub fn attach(&mut self, parent: NodeId, branch: Branch, spec: NodeSpec) -> LabResult<NodeId> {
        if !self.is_building() {
            return Err(LabError::NotInBuildMode);
        }
        self.tree.attach(parent, branch, spec)
    }

    /// Replace the tree with the "Quick Start" sample.
    pub fn load_sample(&mut self) -> LabResult<()> {
        if !self.is_building() {
            return Err(LabError::NotInBuildMode);
        }
        self.tree = DecisionTree::sample();
        info!(nodes = self.tree.len(), "sample tree loaded");
        Ok(())
    }

    /// Switch to play mode with the cursor on the root and an empty log.
    pub fn start_playing(&mut self) -> LabResult<PlayState> {
        if !self.tree.is_playable() {
            return Err(LabError::TreeNotPlayable);
        }
        let player = TreePlayer::new(&self.tree);
        let state = player.state();
        self.mode = Mode::Play(player);
        info!(nodes = self.tree.len(), depth = self.tree.depth(), "playthrough started");
        Ok(state)
    }

    /// Answer the current question.
    pub fn choose(&mut self, branch: Branch) -> LabResult<PlayState> {
        match &mut self.mode {
            Mode::Play(player) => player.choose(&self.tree, branch),
            Mode::Build => Err(LabError::NotInPlayMode),
        }
    }

    /// Leave play mode, keeping the tree.
    pub fn back_to_build(&mut self) {
        self.mode = Mode::Build;
    }

    /// Discard the tree and log and start over with the default root.
    pub fn reset(&mut self) {
        self.tree = DecisionTree::new();
        self.mode = Mode::Build;
        info!("decision tree session reset");
    }

    /// Text outline of the tree for redraw.
    pub fn render_text(&self) -> String {
        render::render_tree(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_builds() {
        let s = DecisionTreeSession::new();
        assert!(s.is_building());
        assert!(s.path().is_empty());
        assert_eq!(s.tree().len(), 1);
    }

    #[test]
    fn cannot_play_bare_root() {
        let mut s = DecisionTreeSession::new();
        assert!(matches!(s.start_playing(), Err(LabError::TreeNotPlayable)));
        assert!(s.is_building());
    }

    #[test]
    fn build_then_play() {
        let mut s = DecisionTreeSession::new();
        let root = s.tree().root();
        let fur = s
            .attach(root, Branch::Yes, NodeSpec::question("Does it have fur?", "🐾"))
            .unwrap();
        s.attach(fur, Branch::Yes, NodeSpec::result("Dog", "🐶"))
            .unwrap();
        s.attach(fur, Branch::No, NodeSpec::result("Snake", "🐍"))
            .unwrap();

        assert_eq!(s.start_playing().unwrap(), PlayState::AtNode(root));
        s.choose(Branch::Yes).unwrap();
        let state = s.choose(Branch::Yes).unwrap();
        let PlayState::AtLeaf(leaf) = state else {
            panic!("expected a leaf, got {state:?}");
        };
        assert_eq!(s.tree().get(leaf).unwrap().label, "Dog");
        assert_eq!(s.path().len(), 2);
    }

    #[test]
    fn modes_guard_operations() {
        let mut s = DecisionTreeSession::new();
        assert!(matches!(s.choose(Branch::Yes), Err(LabError::NotInPlayMode)));

        s.load_sample().unwrap();
        s.start_playing().unwrap();
        let root = s.tree().root();
        let err = s
            .attach(root, Branch::Yes, NodeSpec::question("Sneaky?", "❓"))
            .unwrap_err();
        assert!(matches!(err, LabError::NotInBuildMode));
        assert!(matches!(s.load_sample(), Err(LabError::NotInBuildMode)));
    }

    #[test]
    fn back_to_build_keeps_tree_and_clears_log() {
        let mut s = DecisionTreeSession::new();
        s.load_sample().unwrap();
        s.start_playing().unwrap();
        s.choose(Branch::No).unwrap();

        s.back_to_build();
        assert!(s.is_building());
        assert!(s.path().is_empty());
        assert_eq!(s.tree().len(), 7);

        s.start_playing().unwrap();
        assert!(s.path().is_empty());
    }

    #[test]
    fn reset_discards_tree() {
        let mut s = DecisionTreeSession::new();
        s.load_sample().unwrap();
        let old_root = s.tree().root();
        s.start_playing().unwrap();

        s.reset();
        assert!(s.is_building());
        assert_eq!(s.tree().len(), 1);
        assert_ne!(s.tree().root(), old_root);
    }

    #[test]
    fn render_text_uses_outline() {
        let s = DecisionTreeSession::new();
        assert!(s.render_text().starts_with("🌱 Is it a living thing?"));
    }
}
