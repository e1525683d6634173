//! Student Records Binary
//!
//! Starts the interactive menu on stdin/stdout.
//!
//! With no arguments it uses `student_records.json` in the current
//! directory. `--file` and `--allow-spaces` are optional extras on top of
//! the argument-free interface.

use std::path::PathBuf;

use clap::Parser;
use student_records::{menu, Config, Console, NamePolicy, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Student Records
#[derive(Parser, Debug)]
#[command(name = "student-records")]
#[command(about = "Keep a small list of student records in a local JSON file")]
#[command(long_about = "Keep a small list of student records in a local JSON file.\n\nRun with no arguments for the standard session; all flags are optional.")]
#[command(version)]
struct Args {
    /// Backing file for the record collection
    #[arg(short, long, default_value = Config::DEFAULT_RECORDS_FILE)]
    file: PathBuf,

    /// Accept names and subjects made of several space-separated words
    #[arg(long)]
    allow_spaces: bool,
}

fn main() {
    // Logs go to stderr so they stay out of the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Student Records v{}", student_records::VERSION);

    let policy = if args.allow_spaces {
        NamePolicy::AllowSpaces
    } else {
        NamePolicy::Strict
    };

    let config = Config::builder()
        .records_path(&args.file)
        .name_policy(policy)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut store = match RecordStore::open(&config.records_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", config.records_path.display(), e);
            eprintln!("Could not load {}: {}", config.records_path.display(), e);
            std::process::exit(1);
        }
    };

    let mut console = Console::stdio();
    if let Err(e) = menu::run(&mut store, &mut console, config.name_policy) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
