use colored::Colorize;
use lab_activities::pattern::PressOutcome;
use lab_activities::{LabConfig, PatternGame};

pub fn run(rounds: u32, seed: u64) -> Result<(), String> {
    let mut game = PatternGame::new(&LabConfig::default().with_seed(seed).instant());
    game.start();

    println!(
        "  {} {}",
        "Pattern Challenge".bold(),
        format!("(seed={seed})").dimmed()
    );
    println!();

    for _ in 0..rounds {
        game.finish_playback();
        let round = game.round();
        let sequence = game.sequence().to_vec();
        let shown = sequence
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {} {shown}", format!("round {round:>2}:").dimmed());

        for color in sequence {
            if let PressOutcome::Mismatch { .. } = game.press(color).map_err(|e| e.to_string())? {
                return Err("replayed sequence did not match".into());
            }
        }
    }

    println!();
    println!("  Score after {rounds} rounds: {}", game.score().to_string().green().bold());

    Ok(())
}
