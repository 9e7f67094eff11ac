//! Conversions between text lines and [GameRecord] values.
//!
//! Two line formats are understood:
//! * the persisted format, one record per line: `Name, HighScore, Initials, Plays, $Revenue`
//! * the command payload format used by add and edit commands, where the name is quoted and the
//!   remaining values are separated by single spaces: `"Name" HighScore Initials Plays $Revenue`

use crate::error::RecordError;
use crate::game_record::GameRecord;

const PERSISTED_FIELDS: usize = 5;
const PRICE_PER_PLAY: f64 = 0.25;

/// Return `text` starting at its first character that is not `'0'`, or `"0"` when there is no
/// such character.
///
/// # Examples
/// ```
/// use arcade_records::parser::strip_leading_zeros;
/// assert_eq!(strip_leading_zeros("007"), "7");
/// assert_eq!(strip_leading_zeros("000"), "0");
/// assert_eq!(strip_leading_zeros(""), "0");
/// ```
pub fn strip_leading_zeros(text: &str) -> &str {
    match text.find(|c: char| c != '0') {
        Some(start) => &text[start..],
        None => "0",
    }
}

/// Render a decimal amount with exactly two fractional digits.
pub fn format_revenue(text: &str) -> Result<String, RecordError> {
    let value: f64 = text.trim().parse()
        .map_err(|_| RecordError::format(text, "revenue is not a number"))?;
    Ok(format!("{:.2}", value))
}

/// Compute the revenue earned by `plays` plays, rendered with two fractional digits.
pub fn revenue_for_plays(plays: &str) -> Result<String, RecordError> {
    let plays_value: f64 = plays.trim().parse()
        .map_err(|_| RecordError::format(plays, "plays is not a number"))?;
    Ok(format!("{:.2}", plays_value * PRICE_PER_PLAY))
}

/// Parse a persisted line into a [GameRecord].
///
/// High score and plays are stripped of leading zeros and revenue is re-rendered with two
/// fractional digits. Fields after the fifth are ignored.
///
/// # Examples
/// ```
/// use arcade_records::parser::parse_persisted_line;
/// let record = parse_persisted_line("Galaga, 0031500, JMK, 012, $3.5").unwrap();
/// assert_eq!(record.high_score(), "31500");
/// assert_eq!(record.plays(), "12");
/// assert_eq!(record.revenue(), "3.50");
/// ```
pub fn parse_persisted_line(line: &str) -> Result<GameRecord, RecordError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < PERSISTED_FIELDS {
        return Err(
            RecordError::parse(
                line,
                format!("expected {} comma separated fields, found {}", PERSISTED_FIELDS, parts.len()),
            )
        );
    }

    let high_score = strip_leading_zeros(strip_separator_space(parts[1]));
    let initials = strip_separator_space(parts[2]);
    let plays = strip_leading_zeros(strip_separator_space(parts[3]));
    let revenue_text = strip_separator_space(parts[4]);
    let revenue_text = revenue_text.strip_prefix('$').unwrap_or(revenue_text);
    let revenue = format_revenue(revenue_text)
        .map_err(|_| RecordError::parse(line, format!("revenue '{}' is not a number", revenue_text)))?;

    Ok(GameRecord::new(parts[0], high_score, initials, plays, &revenue))
}

/// Format a [GameRecord] as a persisted line, the inverse of [parse_persisted_line].
pub fn format_persisted_line(record: &GameRecord) -> String {
    record.to_string()
}

/// Parse the payload of an add command into a [GameRecord].
///
/// Values are stored as typed; no leading zero stripping or revenue formatting is applied.
///
/// # Examples
/// ```
/// use arcade_records::parser::parse_command_line;
/// let record = parse_command_line(r#"1 "Ms. Pac-Man" 0900 XYZ 40 $10.00"#).unwrap();
/// assert_eq!(record.name(), "Ms. Pac-Man");
/// assert_eq!(record.high_score(), "0900");
/// assert_eq!(record.revenue(), "10.00");
/// ```
pub fn parse_command_line(line: &str) -> Result<GameRecord, RecordError> {
    let (name, values) = split_quoted_name(line)?;
    let parts: Vec<&str> = values.splitn(4, ' ').collect();
    if parts.len() < 4 {
        return Err(
            RecordError::parse(line, "expected high score, initials, plays and revenue after the name")
        );
    }
    let revenue = parts[3].strip_prefix('$').unwrap_or(parts[3]);
    Ok(GameRecord::new(name, parts[0], parts[1], parts[2], revenue))
}

/// Parse the payload of an edit command into its name, field number and new value.
///
/// The field number is the single character following the name; the new value is everything
/// after the next space.
pub fn parse_edit_line(line: &str) -> Result<(&str, &str, &str), RecordError> {
    let (name, values) = split_quoted_name(line)?;
    let field_end = values.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
    let field_number = &values[..field_end];
    match values.find(' ') {
        Some(space) => Ok((name, field_number, &values[space + 1..])),
        None => Err(RecordError::parse(line, "expected a field number and a new value after the name")),
    }
}

/// Split a command payload into the quoted name and the text after the first space that follows
/// the closing quote.
fn split_quoted_name(line: &str) -> Result<(&str, &str), RecordError> {
    let open = line.find('"')
        .ok_or_else(|| RecordError::parse(line, "missing opening quote"))?;
    let close = line[open + 1..].find('"')
        .map(|i| open + 1 + i)
        .ok_or_else(|| RecordError::parse(line, "missing closing quote"))?;
    let name = &line[open + 1..close];
    let after_quote = &line[close + 1..];
    match after_quote.find(' ') {
        Some(space) => Ok((name, &after_quote[space + 1..])),
        None => Err(RecordError::parse(line, "missing values after the name")),
    }
}

fn strip_separator_space(field: &str) -> &str {
    field.strip_prefix(' ').unwrap_or(field)
}
