//! tonelens - Interactive TUI viewer for the tone dispersion study.
//!
//! Usage:
//!   tonelens                         # open the TUI (1 second clock tick)
//!   tonelens 5                       # 5 second clock tick
//!   tonelens export                  # dump the study tables as JSON to stdout
//!   tonelens export -f csv           # CSV to stdout
//!   tonelens export -f md -o out.md  # Markdown to a file

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use tonelens::content::StudyContent;
use tonelens::export::{ExportData, ExportFormat, write_export};
use tonelens::tui::App;

/// Interactive viewer for the earnings call tone dispersion study.
#[derive(Parser)]
#[command(name = "tonelens", about = "Earnings call tone dispersion study viewer")]
struct Args {
    /// Clock tick interval in seconds (default: 1).
    #[arg(value_name = "INTERVAL")]
    interval: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the study tables without opening the TUI
    Export {
        /// Output format: json, csv, or markdown
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Initializes tracing. Logs go to stderr so the alternate screen stays
/// clean; the default level is WARN unless raised.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("tonelens={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_export(content: &StudyContent, format: &str, output: Option<&PathBuf>) -> io::Result<()> {
    let format = match ExportFormat::from_str(format) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let data = ExportData::new(content);
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_export(format, &data, &mut file)?;
            info!("wrote {} export to {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(format, &data, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let content = StudyContent::load();

    if let Some(Commands::Export { format, output }) = &args.command {
        if let Err(e) = run_export(&content, format, output.as_ref()) {
            eprintln!("Error: export failed: {}", e);
            process::exit(1);
        }
        return;
    }

    let interval = args.interval.unwrap_or(1).max(1);
    let app = App::new(content);
    if let Err(e) = app.run(Duration::from_secs(interval)) {
        eprintln!("Error: terminal failure: {}", e);
        process::exit(1);
    }
}
