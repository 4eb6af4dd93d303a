//! Parsing of text entered at a prompt or typed into a form field.

use tracing::warn;

use crate::ports::FareError;

/// Parse a distance in kilometres.
///
/// # Errors
///
/// Returns [`FareError::InvalidInput`] when the text is not a number, or the
/// number is negative or not finite.
pub fn parse_distance(text: &str) -> Result<f64, FareError> {
    let trimmed = text.trim();
    let distance: f64 = trimmed.parse().map_err(|err| {
        warn!(input = trimmed, "unparseable distance");
        FareError::InvalidInput(format!("distance {trimmed:?} is not a number: {err}"))
    })?;
    if !distance.is_finite() || distance < 0.0 {
        warn!(input = trimmed, "out of range distance");
        return Err(FareError::InvalidInput(format!(
            "distance must be a non-negative number of kilometres, got {trimmed}"
        )));
    }
    Ok(distance)
}

/// Parse a trip duration in whole minutes.
///
/// # Errors
///
/// Returns [`FareError::InvalidInput`] when the text is negative, fractional,
/// or not a number.
pub fn parse_minutes(text: &str) -> Result<u32, FareError> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        warn!(input = trimmed, "negative time");
        return Err(FareError::InvalidInput(format!(
            "time cannot be negative, got {trimmed}"
        )));
    }
    trimmed.parse().map_err(|err| {
        warn!(input = trimmed, "unparseable time");
        FareError::InvalidInput(format!(
            "time {trimmed:?} is not a whole number of minutes: {err}"
        ))
    })
}

/// Interpret a yes/no answer. Only an answer starting with `y` or `Y` is yes.
#[must_use]
pub fn parse_yes_no(text: &str) -> bool {
    text.trim().starts_with(['y', 'Y'])
}

/// Parse a 1-based menu choice into a zero-based index below `count`.
///
/// # Errors
///
/// Returns [`FareError::InvalidInput`] when the text is not a number or falls
/// outside `1..=count`.
pub fn parse_selection(text: &str, count: usize) -> Result<usize, FareError> {
    let trimmed = text.trim();
    let choice: usize = trimmed.parse().map_err(|err| {
        FareError::InvalidInput(format!("choice {trimmed:?} is not a number: {err}"))
    })?;
    if choice == 0 || choice > count {
        warn!(choice, count, "choice out of range");
        return Err(FareError::InvalidInput(format!(
            "choice must be between 1 and {count}, got {choice}"
        )));
    }
    Ok(choice - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_accepts_decimals_and_padding() {
        assert_eq!(parse_distance(" 12.5 ").ok(), Some(12.5));
        assert_eq!(parse_distance("0").ok(), Some(0.0));
    }

    #[test]
    fn distance_rejects_negative_and_garbage() {
        for text in ["-1", "ten", "", "NaN", "inf"] {
            assert!(
                matches!(parse_distance(text), Err(FareError::InvalidInput(_))),
                "{text:?}"
            );
        }
    }

    #[test]
    fn minutes_reject_negative_values() {
        assert_eq!(parse_minutes("15").ok(), Some(15));
        for text in ["-5", "-0", "1.5", "abc", ""] {
            assert!(
                matches!(parse_minutes(text), Err(FareError::InvalidInput(_))),
                "{text:?}"
            );
        }
    }

    #[test]
    fn yes_no_answers() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Y"));
        assert!(parse_yes_no("yes"));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("x"));
    }

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("1", 7).ok(), Some(0));
        assert_eq!(parse_selection("7", 7).ok(), Some(6));
        for text in ["0", "8", "-1", "two"] {
            assert!(
                matches!(parse_selection(text, 7), Err(FareError::InvalidInput(_))),
                "{text:?}"
            );
        }
    }
}
