use std::fmt::{Display, Formatter};

/// A single arcade game entry.
///
/// All five fields are kept as text exactly as they were parsed. Normalization of high score,
/// plays and revenue happens in [crate::parser] when a persisted line is read, and on display
/// when a command reports a value.
///
/// # Examples
/// ```
/// use arcade_records::game_record::GameRecord;
/// let record = GameRecord::new("Pac-Man", "100000", "ABC", "50", "12.50");
/// assert_eq!(record.to_string(), "Pac-Man, 100000, ABC, 50, $12.50");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameRecord {
    name: String,
    high_score: String,
    initials: String,
    plays: String,
    revenue: String,
}

impl GameRecord {
    /// Create a new [GameRecord]
    ///
    /// # Arguments
    /// * `name` - display name of the game, may contain spaces and punctuation but not commas
    /// * `high_score` - decimal digits of the high score
    /// * `initials` - initials of the high score holder
    /// * `plays` - number of times the game was played
    /// * `revenue` - revenue without the `$` sign, normally with two fractional digits
    pub fn new(name: &str, high_score: &str, initials: &str, plays: &str, revenue: &str) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            high_score: high_score.to_string(),
            initials: initials.to_string(),
            plays: plays.to_string(),
            revenue: revenue.to_string(),
        }
    }

    /// Get the name of the game.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the high score.
    pub fn high_score(&self) -> &str {
        &self.high_score
    }

    /// Get the initials of the high score holder.
    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Get the number of plays.
    pub fn plays(&self) -> &str {
        &self.plays
    }

    /// Get the revenue, without the `$` sign.
    pub fn revenue(&self) -> &str {
        &self.revenue
    }

    pub(crate) fn set_high_score(&mut self, high_score: String) {
        self.high_score = high_score;
    }

    pub(crate) fn set_initials(&mut self, initials: String) {
        self.initials = initials;
    }

    /// Plays and revenue always change together.
    pub(crate) fn set_plays(&mut self, plays: String, revenue: String) {
        self.plays = plays;
        self.revenue = revenue;
    }
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, ${}",
            self.name,
            self.high_score,
            self.initials,
            self.plays,
            self.revenue,
        )
    }
}
