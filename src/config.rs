use std::path::PathBuf;

use regex::Regex;

#[derive(Clone)]
pub(crate) struct Config {
    database: PathBuf,
    batch: PathBuf,
    output: PathBuf,
    ignore_empty: bool,
    ignore_lines: Option<Regex>,
}

impl Config {
    pub(crate) fn new(
        database: PathBuf,
        batch: PathBuf,
        output: PathBuf,
        ignore_empty: bool,
        ignore_lines: Option<Regex>,
    ) -> Config {
        Config {
            database,
            batch,
            output,
            ignore_empty,
            ignore_lines,
        }
    }

    pub(crate) fn database(&self) -> &PathBuf {
        &self.database
    }

    pub(crate) fn batch(&self) -> &PathBuf {
        &self.batch
    }

    pub(crate) fn output(&self) -> &PathBuf {
        &self.output
    }

    pub(crate) fn ignore_empty(&self) -> bool {
        self.ignore_empty
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }
}
