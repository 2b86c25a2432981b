use colored::Colorize;
use lab_activities::quiz::{Mode, QuizPhase, Scenario};
use lab_activities::{LabConfig, QuizGame};

pub fn run(answers: &[String]) -> Result<(), String> {
    let modes: Vec<Mode> = super::parse_all(answers)?;

    let mut quiz = QuizGame::new(&LabConfig::default());
    if modes.len() > quiz.len() {
        return Err(format!(
            "got {} answers but there are only {} scenarios",
            modes.len(),
            quiz.len()
        ));
    }

    println!("  {}", "AI vs Human".bold().underline());
    println!();

    if modes.is_empty() {
        for (i, scenario) in lab_activities::quiz::SCENARIOS.iter().enumerate() {
            print_scenario(i, scenario);
            println!("     {} {}", "best answer:".dimmed(), scenario.correct);
            println!("     {}", scenario.explanation);
            println!();
        }
        return Ok(());
    }

    quiz.start();
    for (i, mode) in modes.into_iter().enumerate() {
        let Some(scenario) = quiz.current() else {
            break;
        };
        print_scenario(i, scenario);
        let correct = quiz.answer(mode).map_err(|e| e.to_string())?;
        let verdict = if correct {
            "correct".green().bold()
        } else {
            "not quite".red().bold()
        };
        println!("     you said {mode}: {verdict}");
        println!("     {}", scenario.explanation);
        println!();
    }

    println!(
        "  Score: {} / {} ({}%)",
        quiz.score(),
        quiz.max_score(),
        quiz.percentage()
    );
    if quiz.phase() == QuizPhase::Finished {
        println!("  {}", quiz.rating().to_string().bold());
    } else {
        println!(
            "  {} of {} scenarios answered",
            quiz.index(),
            quiz.len()
        );
    }

    Ok(())
}

fn print_scenario(index: usize, scenario: &Scenario) {
    println!(
        "  {}. {} {}",
        index + 1,
        scenario.icon,
        scenario.situation.bold()
    );
    println!("     {}", scenario.question);
    println!("     {} {}", "human:".dimmed(), scenario.human.answer);
    println!("     {} {}", "ai:   ".dimmed(), scenario.ai.answer);
}
