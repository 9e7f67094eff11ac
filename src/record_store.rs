use crate::error::RecordError;
use crate::game_record::GameRecord;
use crate::key::Key;
use crate::parser::{format_persisted_line, parse_persisted_line};
use crate::sort_key::SortKey;

/// An ordered collection of [GameRecord] values.
///
/// Insertion order is kept until [RecordStore::sort_by] reorders the records. Names are not
/// unique; lookups return the first match in store order.
///
/// # Examples
/// ```
/// use arcade_records::game_record::GameRecord;
/// use arcade_records::record_store::RecordStore;
/// use arcade_records::sort_key::SortKey;
///
/// let mut store = RecordStore::new();
/// store.load(vec!["Pac-Man, 100000, ABC, 50, $12.50", "Asteroids, 99000, JD, 20, $5.00"]).unwrap();
/// store.append(GameRecord::new("Galaga", "31500", "JMK", "12", "3.00"));
/// store.sort_by(SortKey::Plays).unwrap();
/// assert_eq!(store.serialize()[0], "Galaga, 31500, JMK, 12, $3.00");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<GameRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> RecordStore {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Parse each persisted line and append the result in order. The first malformed line stops
    /// the load with a [RecordError::Parse]; records parsed before it remain in the store.
    pub fn load<I, S>(&mut self, lines: I) -> Result<(), RecordError>
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        for line in lines {
            let record = parse_persisted_line(line.as_ref())?;
            self.append(record);
        }
        log::debug!("Loaded {} records", self.records.len());
        Ok(())
    }

    /// Add a record at the end of the store.
    pub fn append(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    /// Find all records whose name contains `term`, ignoring case.
    pub fn find_all_by_name_contains(&self, term: &str) -> Vec<&GameRecord> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&term))
            .collect()
    }

    /// Find the first record whose name is exactly `name`.
    pub fn find_first_by_exact_name(&self, name: &str) -> Option<&GameRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Find the first record whose name is exactly `name`, for modification.
    pub fn find_first_by_exact_name_mut(&mut self, name: &str) -> Option<&mut GameRecord> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Remove and return the first record whose name equals `name`, ignoring case.
    pub fn remove_first_by_name_case_insensitive(&mut self, name: &str) -> Option<GameRecord> {
        let name = name.to_lowercase();
        let position = self.records
            .iter()
            .position(|record| record.name().to_lowercase() == name)?;
        Some(self.records.remove(position))
    }

    /// Sort the records in ascending order of `key`. Records with equal keys keep their relative
    /// order.
    ///
    /// Sorting by [SortKey::Plays] fails with [RecordError::Format] when a plays value is not an
    /// integer; the store is unchanged in that case.
    pub fn sort_by(&mut self, key: SortKey) -> Result<(), RecordError> {
        if self.records.len() < 2 {
            return Ok(());
        }

        let mut keys = Vec::with_capacity(self.records.len());
        for record in &self.records {
            keys.push(Key::new(key.value(record), key.field_type())?);
        }

        let mut keyed: Vec<(Key, GameRecord)> = keys.into_iter()
            .zip(self.records.drain(..))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        self.records = keyed.into_iter()
            .map(|(_, record)| record)
            .collect();
        Ok(())
    }

    /// Format every record as a persisted line, in store order.
    pub fn serialize(&self) -> Vec<String> {
        self.records.iter().map(format_persisted_line).collect()
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item=&GameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
