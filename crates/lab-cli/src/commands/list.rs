use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lab_activities::{CATALOG, Difficulty};

pub fn run(json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&CATALOG).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Activity", "Difficulty", "Description"]);

    for info in &CATALOG {
        let difficulty = match info.difficulty {
            Difficulty::Beginner => info.difficulty.to_string().green(),
            Difficulty::Intermediate => info.difficulty.to_string().yellow(),
            Difficulty::Advanced => info.difficulty.to_string().red(),
        };
        table.add_row(vec![
            info.kind.key().to_string(),
            format!("{} {}", info.icon, info.title),
            difficulty.to_string(),
            info.description.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} activities", CATALOG.len());

    Ok(())
}
