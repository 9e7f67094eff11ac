/// Errors raised while parsing, formatting or ordering game records.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    /// A persisted line or a command line could not be split into its fields.
    #[error("Parse error: {reason}, line: {line}")]
    Parse {
        line: String,
        reason: String,
    },

    /// A value expected to be numeric was not.
    #[error("Format error: {reason}, value: {value}")]
    Format {
        value: String,
        reason: String,
    },
}

impl RecordError {
    pub fn parse(line: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub fn format(value: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
