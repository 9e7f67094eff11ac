//! arcade-records CLI
//!
//! Applies a batch file of commands to a database file of arcade game records and writes the
//! updated records out.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::LevelFilter;
use regex::Regex;
use simple_logger::SimpleLogger;

use arcade_records::batch::{Batch, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "arcade-records")]
#[command(about = "Apply batch commands to a file of arcade game records", long_about = None)]
struct Cli {
    /// Database file, prompted for when missing
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Batch command file, prompted for when missing
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// File the updated records are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Treat empty lines as records and commands instead of skipping them
    #[arg(long)]
    keep_empty: bool,

    /// Skip batch lines matching this regex (e.g. "^#")
    #[arg(long)]
    ignore: Option<Regex>,

    /// Log progress to STDERR, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn prompt(message: &str) -> Result<PathBuf, anyhow::Error> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer).with_context(|| "read STDIN")?;
    let answer = answer.trim();
    if answer.is_empty() {
        Err(anyhow!("No file name given"))
    } else {
        Ok(PathBuf::from(answer))
    }
}

fn run(cli: Cli) -> Result<(), anyhow::Error> {
    let database = match cli.database {
        Some(database) => database,
        None => prompt("Enter Database Name: ")?,
    };
    let batch_file = match cli.batch {
        Some(batch_file) => batch_file,
        None => {
            let batch_file = prompt("\nEnter batch file name: ")?;
            println!();
            batch_file
        }
    };

    let mut batch = Batch::new(database, batch_file);
    batch.with_output(cli.output);
    batch.with_ignore_empty(!cli.keep_empty);
    if let Some(r) = cli.ignore {
        batch.with_ignore_lines(r);
    }
    batch.run()
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
