use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("Nobody knows how fast the {name} flies")]
    UnknownSpeed { name: String },

    #[error("Failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value} for field '{field}' of racer #{index}: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Roster has {} invalid field(s)", .0.len())]
    Invalid(Vec<RaceError>),
}

impl RaceError {
    pub fn unknown_speed(name: impl Into<String>) -> Self {
        Self::UnknownSpeed { name: name.into() }
    }

    pub fn invalid_field(
        index: usize,
        field: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            index,
            field,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, RaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_speed_display() {
        let error = RaceError::unknown_speed("Swallow");
        assert_eq!(error.to_string(), "Nobody knows how fast the Swallow flies");
    }

    #[test]
    fn test_invalid_field_display() {
        let error = RaceError::invalid_field(2, "amplitude", -1.0, "must not be negative");
        let display = error.to_string();
        assert!(display.contains("racer #2"));
        assert!(display.contains("'amplitude'"));
        assert!(display.contains("-1"));
    }

    #[test]
    fn test_invalid_collects_count() {
        let error = RaceError::Invalid(vec![
            RaceError::invalid_field(0, "version", f64::NAN, "must be finite"),
            RaceError::invalid_field(1, "frequency", -2.0, "must not be negative"),
        ]);
        assert_eq!(error.to_string(), "Roster has 2 invalid field(s)");
    }
}
