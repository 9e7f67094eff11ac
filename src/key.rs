use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::RecordError;
use crate::field_type::FieldType;

#[derive(Debug)]
pub(crate) enum Key {
    String {
        s: String
    },
    Integer {
        i: i64
    },
}

impl Key {
    pub(crate) fn new(field: &str, field_type: FieldType) -> Result<Key, RecordError> {
        match field_type {
            FieldType::String => {
                Ok(
                    Key::String {
                        s: field.to_string()
                    }
                )
            }
            FieldType::Integer => {
                let i = i64::from_str(field.trim())
                    .map_err(|e| RecordError::format(field, e.to_string()))?;
                Ok(
                    Key::Integer {
                        i
                    }
                )
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::String { .. } => 0,
            Key::Integer { .. } => 1,
        }
    }
}

impl Eq for Key {}

impl PartialEq<Self> for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::String { s }, Key::String { s: o }) => { s.as_str().cmp(o.as_str()) }
            (Key::Integer { i }, Key::Integer { i: o }) => { i.cmp(o) }
            // keys of one sort are all built from the same field type
            _ => { self.rank().cmp(&other.rank()) }
        }
    }
}
