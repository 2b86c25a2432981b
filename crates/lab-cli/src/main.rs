//! CLI front end for the AI Learning Lab.

mod commands;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

#[derive(Parser)]
#[command(
    name = "ailab",
    about = "AI Learning Lab: hands-on activities that show how AI works",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available activities
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a decision tree and optionally play it with scripted answers
    Tree {
        /// Start from the sample animal/object tree
        #[arg(short, long)]
        sample: bool,

        /// Comma-separated answers to play, e.g. yes,no,yes
        #[arg(short, long, value_delimiter = ',')]
        choices: Vec<String>,

        /// Print the tree and playthrough as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through the AI vs Human quiz
    Quiz {
        /// Comma-separated answers (human or ai), one per scenario
        #[arg(short, long, value_delimiter = ',')]
        answers: Vec<String>,
    },

    /// Send two inputs through the neural network explorer
    #[command(allow_negative_numbers = true)]
    Network {
        /// First input (0-10, snapped to 0.5 steps)
        input0: f64,

        /// Second input (0-10, snapped to 0.5 steps)
        input1: f64,

        /// Print every layer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the color sequences of a perfectly played pattern challenge
    Pattern {
        /// Rounds to play (1-100)
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..=100))]
        rounds: u32,

        /// RNG seed for the sequence
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Launch the terminal UI
    Tui {
        /// Tab to open (home, tree, pattern, network, quiz, train)
        #[arg(short, long, default_value = "home")]
        tab: String,

        /// RNG seed passed to the UI
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Tree {
            sample,
            choices,
            json,
        } => commands::tree::run(sample, &choices, json),
        Commands::Quiz { answers } => commands::quiz::run(&answers),
        Commands::Network {
            input0,
            input1,
            json,
        } => commands::network::run(input0, input1, json),
        Commands::Pattern { rounds, seed } => commands::pattern::run(rounds, seed),
        Commands::Tui { tab, seed } => commands::tui::run(&tab, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install a stderr subscriber whose level follows the `-d` count.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!(?filter, "logging ready");
}
