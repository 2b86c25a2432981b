//! Plain-text views of a tree and a path log, shared by the CLI and TUI.

use crate::branch::Branch;
use crate::node::Node;
use crate::player::PathStep;
use crate::tree::DecisionTree;

/// Marker drawn on an empty branch slot.
pub const OPEN_SLOT: &str = "+";

/// One-line description of a node: glyph, label, and result for leaves.
pub fn node_line(node: &Node) -> String {
    match &node.result {
        Some(result) if node.is_leaf() => format!("{} {} => {}", node.emoji, node.label, result),
        _ => format!("{} {}", node.emoji, node.label),
    }
}

/// Render the tree as an indented outline with `[YES]`/`[NO]` edges.
///
/// Empty slots on question nodes show as `+` so the outline doubles as a
/// map of where the next node can go.
pub fn render_tree(tree: &DecisionTree) -> String {
    let mut out = String::new();
    let root = tree.root_node();
    out.push_str(&node_line(root));
    out.push('\n');
    render_children(tree, root, "", &mut out);
    out
}

fn render_children(tree: &DecisionTree, node: &Node, prefix: &str, out: &mut String) {
    if node.is_leaf() {
        return;
    }
    for branch in Branch::ALL {
        let (connector, indent) = match branch {
            Branch::Yes => ("├─ ", "│  "),
            Branch::No => ("└─ ", "   "),
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&format!("[{}] ", branch.label()));

        match node.child(branch).and_then(|id| tree.get(id)) {
            Some(child) => {
                out.push_str(&node_line(child));
                out.push('\n');
                render_children(tree, child, &format!("{prefix}{indent}"), out);
            }
            None => {
                out.push_str(OPEN_SLOT);
                out.push('\n');
            }
        }
    }
}

/// Render the path log, one answered question per line.
pub fn render_path(path: &[PathStep]) -> String {
    path.iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{}. {} {} -> {}\n",
                i + 1,
                step.emoji,
                step.question,
                step.choice.label()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeSpec;
    use crate::player::TreePlayer;

    #[test]
    fn fresh_tree_shows_two_open_slots() {
        let tree = DecisionTree::new();
        assert_eq!(
            render_tree(&tree),
            "🌱 Is it a living thing?\n├─ [YES] +\n└─ [NO] +\n"
        );
    }

    #[test]
    fn leaves_show_results_and_no_slots() {
        let mut tree = DecisionTree::new();
        let root = tree.root();
        tree.attach(
            root,
            Branch::No,
            NodeSpec::result("Rock", "🪨").with_result_text("It's a Rock!"),
        )
        .unwrap();
        assert_eq!(
            render_tree(&tree),
            "🌱 Is it a living thing?\n├─ [YES] +\n└─ [NO] 🪨 Rock => It's a Rock!\n"
        );
    }

    #[test]
    fn path_lines_are_numbered() {
        let tree = DecisionTree::sample();
        let mut player = TreePlayer::new(&tree);
        player.choose_all(&tree, [Branch::Yes, Branch::No]).unwrap();
        assert_eq!(
            render_path(player.path()),
            "1. 🌱 Is it a living thing? -> YES\n2. 🐾 Does it have fur? -> NO\n"
        );
    }
}
