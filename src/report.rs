use std::fmt::{Display, Formatter};

use crate::field::Field;
use crate::game_record::GameRecord;
use crate::parser::strip_leading_zeros;
use crate::sort_key::SortKey;

/// Operator facing result of one processed command.
///
/// The [Display] implementation renders the exact console text, including trailing blank lines.
#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    Added(GameRecord),
    /// Matches of a search, in store order. Never empty.
    Found(Vec<GameRecord>),
    NotFound(String),
    /// State of the record after the edit
    Updated {
        record: GameRecord,
        field: Field,
    },
    EditNotFound,
    Deleted(GameRecord),
    DeleteNotFound,
    /// Persisted lines of the whole store after the sort
    Sorted {
        key: SortKey,
        lines: Vec<String>,
    },
    /// Nothing to report
    Silent,
}

impl Report {
    pub fn is_silent(&self) -> bool {
        matches!(self, Report::Silent)
    }
}

fn write_fields(f: &mut Formatter<'_>, high_score: &str, initials: &str, plays: &str, revenue: &str) -> std::fmt::Result {
    writeln!(f, "High Score: {}", high_score)?;
    writeln!(f, "Initials: {}", initials)?;
    writeln!(f, "Plays: {}", plays)?;
    writeln!(f, "Revenue: ${}", revenue)
}

fn write_record(f: &mut Formatter<'_>, record: &GameRecord) -> std::fmt::Result {
    writeln!(f, "Name: {}", record.name())?;
    write_fields(f, record.high_score(), record.initials(), record.plays(), record.revenue())
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Added(record) => {
                writeln!(f, "RECORD ADDED")?;
                write_record(f, record)?;
                writeln!(f)
            }
            Report::Found(records) => {
                for record in records {
                    writeln!(f, "{} FOUND", record.name())?;
                    write_fields(f, record.high_score(), record.initials(), record.plays(), record.revenue())?;
                    writeln!(f)?;
                }
                Ok(())
            }
            Report::NotFound(term) => {
                writeln!(f, "{} NOT FOUND", term)
            }
            Report::Updated { record, field } => {
                let high_score = match field {
                    Field::HighScore => strip_leading_zeros(record.high_score()),
                    _ => record.high_score(),
                };
                let plays = match field {
                    Field::Plays => strip_leading_zeros(record.plays()),
                    _ => record.plays(),
                };
                let value = match field {
                    Field::HighScore => high_score,
                    Field::Initials => record.initials(),
                    Field::Plays => plays,
                };
                writeln!(f, "{} UPDATED", record.name())?;
                writeln!(f, "UPDATE TO {} - VALUE {}", field.label(), value)?;
                writeln!(f, "Name: {}", record.name())?;
                write_fields(f, high_score, record.initials(), plays, record.revenue())?;
                writeln!(f)
            }
            Report::EditNotFound => {
                writeln!(f, "Record to edit was not found.")
            }
            Report::Deleted(record) => {
                writeln!(f, "RECORD DELETED")?;
                write_record(f, record)?;
                writeln!(f)
            }
            Report::DeleteNotFound => {
                writeln!(f, "Record to delete was not found in the database file.")
            }
            Report::Sorted { key, lines } => {
                writeln!(f, "RECORDS SORTED BY {}", key)?;
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
                writeln!(f)
            }
            Report::Silent => Ok(()),
        }
    }
}
