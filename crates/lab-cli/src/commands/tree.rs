use colored::Colorize;
use lab_core::render::render_path;
use lab_core::{Branch, DecisionTreeSession, PlayState};
use serde_json::json;

pub fn run(sample: bool, choices: &[String], json: bool) -> Result<(), String> {
    let branches: Vec<Branch> = super::parse_all(choices)?;

    let mut session = DecisionTreeSession::new();
    if sample {
        session.load_sample().map_err(|e| e.to_string())?;
    }

    let state = if branches.is_empty() {
        None
    } else {
        session.start_playing().map_err(|e| e.to_string())?;
        let mut state = None;
        for branch in branches {
            state = Some(session.choose(branch).map_err(|e| e.to_string())?);
        }
        state
    };

    let tree = session.tree();
    let result = session
        .player()
        .and_then(|p| p.result(tree))
        .map(|n| {
            (
                n.result.clone().unwrap_or_else(|| n.label.clone()),
                n.result_emoji.clone().unwrap_or_else(|| n.emoji.clone()),
            )
        });

    if json {
        let out = json!({
            "tree": tree.snapshot(),
            "path": session.path(),
            "state": state,
            "result": result.as_ref().map(|(text, emoji)| json!({ "text": text, "emoji": emoji })),
        });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", "Decision Tree".bold().underline());
    println!();
    for line in session.render_text().lines() {
        println!("  {line}");
    }
    println!();
    println!("  {} nodes, depth {}", tree.len(), tree.depth());

    let Some(state) = state else {
        return Ok(());
    };

    println!();
    println!("  {}", "Decision Path".bold().underline());
    for line in render_path(session.path()).lines() {
        println!("  {line}");
    }
    println!();
    match (state, result) {
        (PlayState::AtLeaf(_), Some((text, emoji))) => {
            println!("  {} {emoji} {text}", "Result:".green().bold());
        }
        (PlayState::Stuck, _) => {
            println!(
                "  {} this branch has no answer yet",
                "Dead end:".yellow().bold()
            );
        }
        (PlayState::AtNode(id), _) => {
            let question = tree.get(id).map(|n| n.label.as_str()).unwrap_or_default();
            println!("  {} {question}", "Next question:".cyan().bold());
        }
        (PlayState::AtLeaf(_), None) => {}
    }

    Ok(())
}
