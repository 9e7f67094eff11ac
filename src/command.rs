use crate::error::RecordError;
use crate::field::Field;
use crate::game_record::GameRecord;
use crate::parser::{parse_command_line, parse_edit_line};
use crate::sort_key::SortKey;

/// One batch line, decoded by its leading directive digit.
///
/// ```text
/// 1 "Name" HighScore Initials Plays $Revenue
/// 2 searchTerm
/// 3 "Name" FieldNumber NewValue
/// 4 Name
/// 5 name|plays
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Append a new record
    Add(GameRecord),
    /// Report every record whose name contains the term, ignoring case
    Search(String),
    /// Change one field of the first record with exactly this name. An unknown field number
    /// is kept as `None`: the record is still looked up but nothing changes.
    Edit {
        name: String,
        field: Option<Field>,
        value: String,
    },
    /// Remove the first record with this name, ignoring case
    Delete(String),
    /// Reorder all records
    Sort(SortKey),
    /// A line without a known directive, or with an unknown sort key. Produces no report.
    Unrecognized(String),
}

impl Command {
    /// Decode a batch line. Fails with [RecordError::Parse] when an add or edit payload cannot be
    /// split into its values.
    ///
    /// # Examples
    /// ```
    /// use arcade_records::command::Command;
    /// use arcade_records::sort_key::SortKey;
    /// assert_eq!(Command::parse("5 plays").unwrap(), Command::Sort(SortKey::Plays));
    /// assert_eq!(Command::parse("4 Pac-Man").unwrap(), Command::Delete("Pac-Man".to_string()));
    /// ```
    pub fn parse(line: &str) -> Result<Command, RecordError> {
        let payload = line.get(2..).unwrap_or("");
        let command = match line.as_bytes().first() {
            Some(b'1') => Command::Add(parse_command_line(line)?),
            Some(b'2') => Command::Search(payload.to_string()),
            Some(b'3') => {
                let (name, field_number, value) = parse_edit_line(line)?;
                Command::Edit {
                    name: name.to_string(),
                    field: Field::from_number(field_number),
                    value: value.to_string(),
                }
            }
            Some(b'4') => Command::Delete(payload.to_string()),
            Some(b'5') => {
                match payload.parse::<SortKey>() {
                    Ok(key) => Command::Sort(key),
                    Err(_) => Command::Unrecognized(line.to_string()),
                }
            }
            _ => Command::Unrecognized(line.to_string()),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use crate::command::Command;
    use crate::error::RecordError;
    use crate::field::Field;
    use crate::game_record::GameRecord;
    use crate::sort_key::SortKey;

    #[test]
    fn test_parse_directives() -> Result<(), RecordError> {
        assert_eq!(
            Command::parse(r#"1 "Pac-Man" 100000 ABC 50 $12.50"#)?,
            Command::Add(GameRecord::new("Pac-Man", "100000", "ABC", "50", "12.50"))
        );
        assert_eq!(Command::parse("2 pac man")?, Command::Search("pac man".to_string()));
        assert_eq!(
            Command::parse(r#"3 "Pac-Man" 3 40"#)?,
            Command::Edit { name: "Pac-Man".to_string(), field: Some(Field::Plays), value: "40".to_string() }
        );
        assert_eq!(Command::parse("4 Pac-Man")?, Command::Delete("Pac-Man".to_string()));
        assert_eq!(Command::parse("5 name")?, Command::Sort(SortKey::Name));
        Ok(())
    }

    #[test]
    fn test_parse_unknown_field_number() -> Result<(), RecordError> {
        assert_eq!(
            Command::parse(r#"3 "Pac-Man" 7 40"#)?,
            Command::Edit { name: "Pac-Man".to_string(), field: None, value: "40".to_string() }
        );
        Ok(())
    }

    #[test]
    fn test_parse_unrecognized() -> Result<(), RecordError> {
        assert_eq!(Command::parse("")?, Command::Unrecognized("".to_string()));
        assert_eq!(Command::parse("9 hello")?, Command::Unrecognized("9 hello".to_string()));
        assert_eq!(Command::parse("5 score")?, Command::Unrecognized("5 score".to_string()));
        Ok(())
    }

    #[test]
    fn test_parse_short_payload() -> Result<(), RecordError> {
        assert_eq!(Command::parse("2")?, Command::Search("".to_string()));
        Ok(())
    }

    #[test]
    fn test_parse_malformed_add() {
        assert!(matches!(Command::parse("1 Pac-Man 100 ABC 5 $1.25"), Err(RecordError::Parse { .. })));
    }
}
