//! examtrack CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "examtrack", version, about = "Exam results tracker and statistics dashboard")]
struct Cli {
    /// Path to the JSON data file
    #[arg(long, global = true, default_value = "./examtrack.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new exam result
    Add {
        /// Exam display name
        #[arg(long)]
        name: String,

        /// Subject label
        #[arg(long)]
        subject: Option<String>,

        /// Exam date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Total number of questions
        #[arg(long)]
        total: u32,

        /// Questions answered correctly
        #[arg(long)]
        correct: u32,

        /// Questions answered incorrectly
        #[arg(long)]
        incorrect: u32,

        /// Questions left unanswered (default: total - correct - incorrect)
        #[arg(long)]
        not_attempted: Option<u32>,

        /// Raw score for partial-credit exams (default: correct)
        #[arg(long)]
        score: Option<f64>,
    },

    /// List the most recent exams
    List {
        /// Max records to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show overall and per-subject statistics
    Stats {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the score distribution across the five bands
    Distribution,

    /// Show the moving-average score trend
    Trend {
        /// Moving-average window size
        #[arg(long, default_value = "3")]
        window: usize,
    },

    /// Update fields of an existing exam record
    Update {
        /// Record id
        id: Uuid,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        total: Option<u32>,

        #[arg(long)]
        correct: Option<u32>,

        #[arg(long)]
        incorrect: Option<u32>,

        #[arg(long)]
        not_attempted: Option<u32>,

        #[arg(long)]
        score: Option<f64>,
    },

    /// Delete an exam record
    Delete {
        /// Record id
        id: Uuid,
    },

    /// Delete all exam records
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Export all records as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replace all records from a JSON export
    Import {
        /// JSON file produced by `export`
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examtrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_file = cli.data_file;

    let result = match cli.command {
        Commands::Add {
            name,
            subject,
            date,
            total,
            correct,
            incorrect,
            not_attempted,
            score,
        } => commands::add::execute(
            &data_file,
            name,
            subject,
            date,
            total,
            correct,
            incorrect,
            not_attempted,
            score,
        ),
        Commands::List { limit, format } => commands::list::execute(&data_file, limit, &format),
        Commands::Stats { format } => commands::stats::execute(&data_file, &format),
        Commands::Distribution => commands::distribution::execute(&data_file),
        Commands::Trend { window } => commands::trend::execute(&data_file, window),
        Commands::Update {
            id,
            name,
            subject,
            date,
            total,
            correct,
            incorrect,
            not_attempted,
            score,
        } => commands::manage::update(
            &data_file,
            id,
            name,
            subject,
            date,
            total,
            correct,
            incorrect,
            not_attempted,
            score,
        ),
        Commands::Delete { id } => commands::manage::delete(&data_file, id),
        Commands::Clear { yes } => commands::manage::clear(&data_file, yes),
        Commands::Export { output } => commands::transfer::export(&data_file, output),
        Commands::Import { file } => commands::transfer::import(&data_file, &file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
