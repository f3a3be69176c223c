//! Parsing of countdown targets typed by the user
//!
//! Accepted forms: `H:M:S`, `M:S` and `S`. Each component is a non-negative
//! integer and is not range-limited, so `"90"` and `"0:90"` both mean 90s.

use std::time::Duration;

/// Error type for countdown input parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// Nothing but whitespace
    Empty,
    /// More than three `:`-separated components
    TooManyComponents(usize),
    /// A component that is not a non-negative integer
    InvalidComponent(String),
    /// The total does not fit in a `u64` of seconds
    Overflow,
}

impl std::fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseDurationError::Empty => write!(f, "empty duration"),
            ParseDurationError::TooManyComponents(n) => {
                write!(f, "expected at most 3 components (h:m:s), got {}", n)
            }
            ParseDurationError::InvalidComponent(part) => {
                write!(f, "invalid duration component: {:?}", part)
            }
            ParseDurationError::Overflow => write!(f, "duration too large"),
        }
    }
}

impl std::error::Error for ParseDurationError {}

/// Parse `H:M:S`, `M:S` or `S` into a duration
pub fn parse_duration(text: &str) -> Result<Duration, ParseDurationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return Err(ParseDurationError::TooManyComponents(parts.len()));
    }

    let mut values = [0u64; 3];
    // Right-align so "M:S" fills minutes and seconds
    let offset = 3 - parts.len();
    for (i, part) in parts.iter().enumerate() {
        values[offset + i] = parse_component(part)?;
    }

    let [hours, minutes, seconds] = values;
    let total = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(ParseDurationError::Overflow)?;

    Ok(Duration::from_secs(total))
}

fn parse_component(part: &str) -> Result<u64, ParseDurationError> {
    let trimmed = part.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDurationError::InvalidComponent(part.to_string()));
    }
    trimmed.parse::<u64>().map_err(|_| ParseDurationError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_component_rejected() {
        assert_eq!(
            parse_duration("1::2"),
            Err(ParseDurationError::InvalidComponent(String::new()))
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            parse_duration("-5"),
            Err(ParseDurationError::InvalidComponent(_))
        ));
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_duration(" 1 : 30 "), Ok(Duration::from_secs(90)));
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            parse_duration("99999999999999999999"),
            Err(ParseDurationError::Overflow)
        );
        assert_eq!(
            parse_duration("18446744073709551615:0:0"),
            Err(ParseDurationError::Overflow)
        );
    }
}
