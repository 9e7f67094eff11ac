use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::RecordError;
use crate::field_type::FieldType;
use crate::game_record::GameRecord;

/// The record attribute a sort command orders by.
///
/// # Examples
/// ```
/// use arcade_records::sort_key::SortKey;
/// let key: SortKey = "plays".parse().unwrap();
/// assert_eq!(key, SortKey::Plays);
/// assert!("score".parse::<SortKey>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic order of names
    Name,
    /// Numeric order of plays
    Plays,
}

impl SortKey {
    /// Get the [FieldType] used to compare values of this key.
    pub fn field_type(&self) -> FieldType {
        match self {
            SortKey::Name => FieldType::String,
            SortKey::Plays => FieldType::Integer,
        }
    }

    /// Get the raw value of this key in a record.
    pub fn value<'a>(&self, record: &'a GameRecord) -> &'a str {
        match self {
            SortKey::Name => record.name(),
            SortKey::Plays => record.plays(),
        }
    }
}

impl FromStr for SortKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "plays" => Ok(SortKey::Plays),
            _ => Err(RecordError::parse(s, "unknown sort key, expected name or plays")),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Plays => write!(f, "plays"),
        }
    }
}
