use crate::command::Command;
use crate::error::RecordError;
use crate::field::Field;
use crate::parser::revenue_for_plays;
use crate::record_store::RecordStore;
use crate::report::Report;

/// Apply one [Command] to the store and describe the outcome.
///
/// Records that cannot be found are reported, not returned as errors. Errors are returned only
/// when a plays value is not numeric, either as the new value of an edit or while sorting by
/// plays.
///
/// # Examples
/// ```
/// use arcade_records::command::Command;
/// use arcade_records::processor::process;
/// use arcade_records::record_store::RecordStore;
///
/// let mut store = RecordStore::new();
/// let command = Command::parse(r#"1 "Pac-Man" 100000 ABC 50 $12.50"#).unwrap();
/// let report = process(&mut store, command).unwrap();
/// assert!(report.to_string().starts_with("RECORD ADDED\n"));
/// assert_eq!(store.len(), 1);
/// ```
pub fn process(store: &mut RecordStore, command: Command) -> Result<Report, RecordError> {
    match command {
        Command::Add(record) => {
            store.append(record.clone());
            Ok(Report::Added(record))
        }
        Command::Search(term) => {
            let found: Vec<_> = store.find_all_by_name_contains(&term)
                .into_iter()
                .cloned()
                .collect();
            if found.is_empty() {
                Ok(Report::NotFound(term))
            } else {
                Ok(Report::Found(found))
            }
        }
        Command::Edit { name, field, value } => {
            let record = match store.find_first_by_exact_name_mut(&name) {
                Some(record) => record,
                None => return Ok(Report::EditNotFound),
            };
            let field = match field {
                Some(field) => field,
                None => {
                    log::warn!("Ignoring edit of {} with an unknown field number", name);
                    return Ok(Report::Silent);
                }
            };
            match field {
                Field::HighScore => record.set_high_score(value),
                Field::Initials => record.set_initials(value),
                Field::Plays => {
                    let revenue = revenue_for_plays(&value)?;
                    record.set_plays(value, revenue);
                }
            }
            Ok(
                Report::Updated {
                    record: record.clone(),
                    field,
                }
            )
        }
        Command::Delete(name) => {
            match store.remove_first_by_name_case_insensitive(&name) {
                Some(record) => Ok(Report::Deleted(record)),
                None => Ok(Report::DeleteNotFound),
            }
        }
        Command::Sort(key) => {
            if store.len() < 2 {
                log::debug!("Skipping sort by {} of {} records", key, store.len());
                return Ok(Report::Silent);
            }
            store.sort_by(key)?;
            Ok(
                Report::Sorted {
                    key,
                    lines: store.serialize(),
                }
            )
        }
        Command::Unrecognized(line) => {
            log::warn!("Ignoring unrecognized command: {}", line);
            Ok(Report::Silent)
        }
    }
}
