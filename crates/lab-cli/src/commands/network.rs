use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lab_activities::{LabConfig, NetworkExplorer};
use serde_json::json;

pub fn run(input0: f64, input1: f64, json: bool) -> Result<(), String> {
    let mut explorer = NetworkExplorer::new(&LabConfig::default().instant());
    explorer.set_input(0, input0).map_err(|e| e.to_string())?;
    explorer.set_input(1, input1).map_err(|e| e.to_string())?;
    let pass = explorer.process().map_err(|e| e.to_string())?;
    explorer.finish();

    let inputs = explorer.inputs();
    if json {
        let out = json!({ "inputs": inputs, "pass": pass });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let fmt_layer = |values: &[f64]| {
        values
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Layer", "Neurons", "Values"]);
    table.add_row(vec![
        "inputs".to_string(),
        inputs.len().to_string(),
        format!(
            "{} {:.1}  {} {:.1}",
            explorer.icon(0),
            inputs[0],
            explorer.icon(1),
            inputs[1]
        ),
    ]);
    table.add_row(vec![
        "hidden 1".to_string(),
        pass.hidden1.len().to_string(),
        fmt_layer(&pass.hidden1),
    ]);
    table.add_row(vec![
        "hidden 2".to_string(),
        pass.hidden2.len().to_string(),
        fmt_layer(&pass.hidden2),
    ]);
    table.add_row(vec!["output".to_string(), "1".to_string(), fmt_layer(&[pass.output])]);

    println!("{table}");
    println!();
    println!("  {} {}", "output".bold(), format!("{:.2}", pass.output).green().bold());

    Ok(())
}
