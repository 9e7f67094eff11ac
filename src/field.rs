/// An editable field of a [crate::game_record::GameRecord].
///
/// Edit commands address a field by its number, given as a single character.
///
/// # Examples
/// ```
/// use arcade_records::field::Field;
/// assert_eq!(Field::from_number("3"), Some(Field::Plays));
/// assert_eq!(Field::from_number("4"), None);
/// assert_eq!(Field::Plays.label(), "plays");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Field number 1
    HighScore,
    /// Field number 2
    Initials,
    /// Field number 3. Changing plays also recomputes revenue.
    Plays,
}

impl Field {
    /// Resolve a field number. Only the exact texts "1", "2" and "3" are recognized.
    pub fn from_number(number: &str) -> Option<Field> {
        match number {
            "1" => Some(Field::HighScore),
            "2" => Some(Field::Initials),
            "3" => Some(Field::Plays),
            _ => None,
        }
    }

    /// Get the label used for this field in update reports.
    pub fn label(&self) -> &'static str {
        match self {
            Field::HighScore => "high score",
            Field::Initials => "initials",
            Field::Plays => "plays",
        }
    }
}
