use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use regex::Regex;
use tempfile::Builder;

use crate::command::Command;
use crate::config::Config;
use crate::processor::process;
use crate::record_store::RecordStore;

/// Name of the file the updated records are written to unless configured otherwise.
pub const DEFAULT_OUTPUT: &str = "freeplay.dat";

/// Apply a batch file of commands to a database file of game records
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use arcade_records::batch::Batch;
///
/// fn update_records(database: PathBuf, commands: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut batch = Batch::new(database, commands);
///     // the default output is freeplay.dat in the current directory
///     batch.with_output(output);
///     batch.run()
/// }
/// ```
pub struct Batch {
    database: PathBuf,
    batch: PathBuf,
    output: PathBuf,
    ignore_empty: bool,
    ignore_lines: Option<Regex>,
}

impl Batch {
    /// Create a default Batch definition.
    ///
    /// * The database file is read when it exists and treated as empty otherwise
    /// * The batch file must exist
    /// * Records are written to [DEFAULT_OUTPUT]
    /// * Empty lines are ignored in both files
    /// * No batch lines are ignored by pattern
    pub fn new(database: PathBuf, batch: PathBuf) -> Batch {
        Batch {
            database,
            batch,
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore_empty: true,
            ignore_lines: None,
        }
    }

    /// Set the file the updated records are written to.
    pub fn with_output(&mut self, output: PathBuf) {
        self.output = output;
    }

    /// Direct the run to skip empty lines in the database and batch files. The default is true.
    /// When false an empty database line is a parse error.
    pub fn with_ignore_empty(&mut self, ignore_empty: bool) {
        self.ignore_empty = ignore_empty;
    }

    /// Specify which batch lines to ignore. Each batch line matching the regex is skipped.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// Run the batch, writing command reports to STDOUT
    pub fn run(&self) -> Result<(), anyhow::Error> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_writer(&mut out)
    }

    /// Run the batch, writing command reports to `out`
    pub fn run_with_writer<W: Write>(&self, out: &mut W) -> Result<(), anyhow::Error> {
        let config = self.create_config();
        log::info!("Start batch {}", config.batch().display());

        let mut store = RecordStore::new();
        let database_lines = Self::read_database(&config)?;
        store.load(&database_lines)
            .with_context(|| format!("file: {}", config.database().display()))?;
        log::info!("Loaded {} records from {}", store.len(), config.database().display());

        let batch_lines = read_lines(config.batch(), config.ignore_empty(), config.ignore_lines().as_ref())?;
        process_lines(&mut store, &batch_lines, out)
            .with_context(|| format!("file: {}", config.batch().display()))?;
        out.flush()?;

        Self::write_store(&store, config.output())?;
        log::info!("Wrote {} records to {}", store.len(), config.output().display());
        Ok(())
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.database.clone(),
            self.batch.clone(),
            self.output.clone(),
            self.ignore_empty,
            self.ignore_lines.clone(),
        )
    }

    fn read_database(config: &Config) -> Result<Vec<String>, anyhow::Error> {
        if config.database().exists() {
            read_lines(config.database(), config.ignore_empty(), None)
        } else {
            log::info!("Database {} does not exist, starting empty", config.database().display());
            Ok(Vec::new())
        }
    }

    /// Write to a temp file next to the output and persist it over the output.
    fn write_store(store: &RecordStore, output: &Path) -> Result<(), anyhow::Error> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp_file = Builder::new()
            .prefix("arcade-records-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .with_context(|| anyhow!("Failed to create temp file in {}", dir.display()))?;

        let mut writer = BufWriter::new(tmp_file.as_file());
        for line in store.serialize() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        drop(writer);

        tmp_file.persist(output)
            .with_context(|| anyhow!("Persist records to {}", output.display()))?;
        Ok(())
    }
}

/// Decode and apply each batch line in order, writing every non silent report to `out`.
///
/// Missing records are reported and processing continues. A malformed add or edit line, or a
/// non numeric plays value, stops processing with an error naming the line.
///
/// # Examples
/// ```
/// use arcade_records::batch::process_lines;
/// use arcade_records::record_store::RecordStore;
///
/// let mut store = RecordStore::new();
/// let mut out = Vec::new();
/// process_lines(&mut store, ["4 Pac-Man"], &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Record to delete was not found in the database file.\n");
/// ```
pub fn process_lines<I, S, W>(store: &mut RecordStore, lines: I, out: &mut W) -> Result<(), anyhow::Error>
    where
        I: IntoIterator<Item=S>,
        S: AsRef<str>,
        W: Write,
{
    for (n, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        log::debug!("Processing command {}: {}", n + 1, line);
        let report = Command::parse(line)
            .and_then(|command| process(store, command))
            .with_context(|| format!("command line: {}", n + 1))?;
        if !report.is_silent() {
            write!(out, "{}", report)?;
        }
    }
    Ok(())
}

fn read_lines(path: &Path, ignore_empty: bool, ignore_lines: Option<&Regex>) -> Result<Vec<String>, anyhow::Error> {
    let file = File::open(path)
        .with_context(|| format!("path: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line.with_context(|| format!("path: {}", path.display()))?;
        if line.ends_with('\r') {
            line.pop();
        }

        if ignore_empty && line.trim().is_empty() {
            continue;
        }

        if let Some(r) = ignore_lines {
            if r.is_match(&line) {
                continue;
            }
        }
        lines.push(line);
    }
    Ok(lines)
}
