//! Standalone TUI binary for the AI Learning Lab.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use lab_activities::LabConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lab-tui",
    about = "Terminal UI for the AI Learning Lab",
    version
)]
struct Args {
    /// Start on a specific tab (home, tree, pattern, network, quiz, train)
    #[arg(long, default_value = "home")]
    tab: String,

    /// RNG seed for pattern sequences and training test items
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = setup_logging(path) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    let tab = lab_tui::tabs::TabId::from_name(&args.tab).unwrap_or(lab_tui::tabs::TabId::Home);
    let config = LabConfig::default().with_seed(args.seed);
    tracing::info!(%tab, seed = args.seed, "starting lab-tui");

    let app = lab_tui::app::TuiApp::new(config, tab);

    if let Err(e) = lab_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Route tracing output to a log file. `RUST_LOG` overrides the default
/// `debug` level.
fn setup_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("logger init failed: {e}"))
}
