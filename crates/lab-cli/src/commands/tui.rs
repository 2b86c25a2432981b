//! Launch the lab-tui standalone binary.

/// Launch the lab-tui binary on the given tab.
pub fn run(tab: &str, seed: u64) -> Result<(), String> {
    let status = std::process::Command::new("lab-tui")
        .arg("--tab")
        .arg(tab)
        .arg("--seed")
        .arg(seed.to_string())
        .status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("lab-tui exited with {s}")),
        Err(_) => Err(
            "lab-tui binary not found. Install with: cargo install --path crates/lab-tui".into(),
        ),
    }
}
