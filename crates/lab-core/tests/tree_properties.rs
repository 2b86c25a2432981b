//! Structural properties of trees grown by arbitrary attach sequences.

use std::collections::{HashMap, HashSet};

use lab_core::render::render_tree;
use lab_core::{Branch, DecisionTree, NodeId, NodeSpec, PlayState, TreePlayer};
use proptest::prelude::*;

/// One attach request: which open slot (by index, wrapped) and what kind of node.
#[derive(Debug, Clone)]
struct AttachOp {
    slot: usize,
    leaf: bool,
}

fn attach_op() -> impl Strategy<Value = AttachOp> {
    (any::<usize>(), any::<bool>()).prop_map(|(slot, leaf)| AttachOp { slot, leaf })
}

/// Grow a tree by always attaching to an open slot.
fn grow(ops: &[AttachOp]) -> (DecisionTree, HashMap<NodeId, bool>) {
    let mut tree = DecisionTree::new();
    let mut leaf_flags = HashMap::new();
    leaf_flags.insert(tree.root(), false);

    for (i, op) in ops.iter().enumerate() {
        let slots = tree.open_slots();
        if slots.is_empty() {
            break;
        }
        let (parent, branch) = slots[op.slot % slots.len()];
        let spec = if op.leaf {
            NodeSpec::result(format!("Result {i}"), "🎮")
        } else {
            NodeSpec::question(format!("Question {i}?"), "❓")
        };
        let id = tree.attach(parent, branch, spec).unwrap();
        leaf_flags.insert(id, op.leaf);
    }
    (tree, leaf_flags)
}

proptest! {
    #[test]
    fn attach_keeps_tree_acyclic_with_single_parents(ops in prop::collection::vec(attach_op(), 0..40)) {
        let (tree, _) = grow(&ops);

        // Pre-order from the root reaches every node exactly once.
        let order = tree.preorder();
        let unique: HashSet<_> = order.iter().copied().collect();
        prop_assert_eq!(order.len(), unique.len());
        prop_assert_eq!(order.len(), tree.len());

        // Every child is referenced by exactly one parent edge.
        let mut seen_children = HashSet::new();
        for id in &order {
            let node = tree.get(*id).unwrap();
            for branch in Branch::ALL {
                if let Some(child) = node.child(branch) {
                    prop_assert!(seen_children.insert(child));
                    prop_assert_eq!(tree.parent_of(child), Some((*id, branch)));
                }
            }
        }
        prop_assert!(!seen_children.contains(&tree.root()));
    }

    #[test]
    fn leaf_flags_never_change(ops in prop::collection::vec(attach_op(), 0..40)) {
        let (tree, flags) = grow(&ops);
        for (id, leaf) in flags {
            let node = tree.get(id).unwrap();
            prop_assert_eq!(node.is_leaf(), leaf);
            if leaf {
                prop_assert!(!node.has_children());
                prop_assert!(node.result.is_some());
            }
        }
    }

    #[test]
    fn playthroughs_are_deterministic(
        ops in prop::collection::vec(attach_op(), 1..30),
        answers in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let (tree, _) = grow(&ops);
        let branches: Vec<Branch> = answers
            .iter()
            .map(|yes| if *yes { Branch::Yes } else { Branch::No })
            .collect();

        let run = || {
            let mut player = TreePlayer::new(&tree);
            for b in &branches {
                if player.choose(&tree, *b).is_err() {
                    break;
                }
            }
            (player.state(), player.path().len())
        };
        let first = run();
        prop_assert_eq!(first, run());
        if first.0 == PlayState::Stuck {
            prop_assert!(first.1 >= 1);
        }
    }
}

#[test]
fn sample_tree_outline() {
    let tree = DecisionTree::sample();
    insta::assert_snapshot!(render_tree(&tree), @r"
    🌱 Is it a living thing?
    ├─ [YES] 🐾 Does it have fur?
    │  ├─ [YES] 🐶 Dog => It's a Dog!
    │  └─ [NO] 🐍 Snake => It's a Snake!
    └─ [NO] ⚡ Is it electronic?
       ├─ [YES] 💻 Computer => It's a Computer!
       └─ [NO] 🪨 Rock => It's a Rock!
    ");
}

#[test]
fn living_thing_example_reaches_dog() {
    let mut tree = DecisionTree::new();
    let root = tree.root();
    let fur = tree
        .attach(root, Branch::Yes, NodeSpec::question("Does it have fur?", "🐾"))
        .unwrap();
    tree.attach(fur, Branch::Yes, NodeSpec::result("Dog", "🐶"))
        .unwrap();
    tree.attach(fur, Branch::No, NodeSpec::result("Snake", "🐍"))
        .unwrap();

    for _ in 0..3 {
        let mut player = TreePlayer::new(&tree);
        let state = player.choose_all(&tree, [Branch::Yes, Branch::Yes]).unwrap();
        assert!(matches!(state, PlayState::AtLeaf(_)));
        assert_eq!(player.current(&tree).unwrap().label, "Dog");
    }
}
