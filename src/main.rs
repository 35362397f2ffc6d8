//! pos-fix - CLI tool to turn a KiCad position export into a JLCPCB CPL file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use jlc_pos_fix::{fix_position_file, ErrorCode, MANUFACTURING_DIR};

/// Convert `Manufacturing/*-all-pos*.csv` into the JLCPCB placement format.
#[derive(Parser, Debug)]
#[command(name = "pos-fix")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the position export (default: Manufacturing next to the executable)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Every failure is reported and the process still exits normally.
    if let Err(err) = run(&args) {
        error!("Error processing file: {:#}", err);
    }
}

fn run(args: &Args) -> Result<()> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => default_dir()?,
    };

    match fix_position_file(&dir) {
        Ok(report) => {
            if args.json {
                let json = serde_json::to_string_pretty(&report)?;
                println!("{}", json);
            }
        }
        Err(err) => match err.code() {
            ErrorCode::NoMatchingFile | ErrorCode::EmptyFile => info!("{}", err.user_message()),
            ErrorCode::MalformedHeader => warn!("{}", err.user_message()),
            ErrorCode::Io => error!("{}", err.user_message()),
        },
    }

    Ok(())
}

/// `Manufacturing` in the directory that holds the executable.
fn default_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let parent = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(parent.join(MANUFACTURING_DIR))
}
