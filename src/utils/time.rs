//! Timestamp and seconds conversion
//!
//! Timestamps are colon-separated segments read from the least significant
//! (seconds) upward. Every segment but the most significant one must lie in
//! `0..60`; hours never wrap.

use crate::domain::errors::DomainError;

/// Parse a `H:MM:SS` style timestamp into seconds.
///
/// Accepts any number of segments (`"55"`, `"0:55"`, `"1:02:03"`). Only the
/// seconds segment may carry a fractional part.
pub fn to_seconds(timestamp: &str) -> Result<f64, DomainError> {
    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return Err(DomainError::Format("timestamp is empty".to_string()));
    }

    let segments: Vec<&str> = timestamp.split(':').collect();
    let most_significant = segments.len() - 1;
    let mut total = 0.0;
    let mut scale = 1.0;

    for (position, segment) in segments.iter().rev().enumerate() {
        let value = parse_segment(segment, position == 0, timestamp)?;

        if position != most_significant && value >= 60.0 {
            return Err(DomainError::Format(format!(
                "'{}': segment '{}' must be between 0 and 59",
                timestamp, segment
            )));
        }

        total += value * scale;
        scale *= 60.0;
    }

    Ok(total)
}

/// Format seconds as `H:MM:SS`, dropping any fractional second.
pub fn to_timestamp(seconds: f64) -> Result<String, DomainError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(DomainError::Domain(format!(
            "cannot format {} seconds as a timestamp",
            seconds
        )));
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    Ok(format!("{}:{:02}:{:02}", hours, minutes, secs))
}

fn parse_segment(segment: &str, allow_fraction: bool, timestamp: &str) -> Result<f64, DomainError> {
    let invalid = || {
        DomainError::Format(format!(
            "'{}': segment '{}' is not a non-negative number",
            timestamp, segment
        ))
    };

    let dots = segment.chars().filter(|c| *c == '.').count();
    let digits_only = segment.chars().all(|c| c.is_ascii_digit() || c == '.');
    if segment.is_empty() || !digits_only || dots > usize::from(allow_fraction) || segment == "." {
        return Err(invalid());
    }

    segment.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds_hh_mm_ss() {
        assert_eq!(to_seconds("1:02:03").unwrap(), 3723.0);
        assert_eq!(to_seconds("0:00:00").unwrap(), 0.0);
        assert_eq!(to_seconds("10:00:00").unwrap(), 36000.0);
    }

    #[test]
    fn test_to_seconds_short_forms() {
        assert_eq!(to_seconds("55").unwrap(), 55.0);
        assert_eq!(to_seconds("0:55").unwrap(), 55.0);
        assert_eq!(to_seconds("1:30").unwrap(), 90.0);
        assert_eq!(to_seconds(" 1:30 ").unwrap(), 90.0);
    }

    #[test]
    fn test_to_seconds_unbounded_most_significant_segment() {
        assert_eq!(to_seconds("90").unwrap(), 90.0);
        assert_eq!(to_seconds("75:00").unwrap(), 4500.0);
        assert_eq!(to_seconds("100:00:00").unwrap(), 360000.0);
    }

    #[test]
    fn test_to_seconds_fractional_seconds() {
        assert_eq!(to_seconds("0:01:30.5").unwrap(), 90.5);
        assert!(to_seconds("0:1.5:30").is_err());
    }

    #[test]
    fn test_to_seconds_invalid() {
        for bad in ["", "   ", "abc", "1:xx", "1::30", "-1:00", "0:-5", "0:60", "1:60:00", "1:2:3a", "."] {
            let err = to_seconds(bad).unwrap_err();
            assert!(matches!(err, DomainError::Format(_)), "{} gave {:?}", bad, err);
        }
    }

    #[test]
    fn test_to_timestamp() {
        assert_eq!(to_timestamp(0.0).unwrap(), "0:00:00");
        assert_eq!(to_timestamp(59.9).unwrap(), "0:00:59");
        assert_eq!(to_timestamp(3723.0).unwrap(), "1:02:03");
        assert_eq!(to_timestamp(360000.0).unwrap(), "100:00:00");
    }

    #[test]
    fn test_to_timestamp_rejects_negative() {
        assert!(matches!(to_timestamp(-1.0), Err(DomainError::Domain(_))));
        assert!(matches!(to_timestamp(f64::NAN), Err(DomainError::Domain(_))));
    }

    #[test]
    fn test_round_trip_produces_canonical_form() {
        assert_eq!(to_timestamp(to_seconds("0:5:7").unwrap()).unwrap(), "0:05:07");
        assert_eq!(to_timestamp(to_seconds("01:02:03").unwrap()).unwrap(), "1:02:03");
        assert_eq!(to_timestamp(to_seconds("2:03").unwrap()).unwrap(), "0:02:03");
    }

    #[test]
    fn test_seconds_round_trip_whole_seconds() {
        for seconds in [0.0, 1.0, 59.0, 61.0, 3599.0, 3600.0, 86_399.0, 123_456.0] {
            assert_eq!(to_seconds(&to_timestamp(seconds).unwrap()).unwrap(), seconds);
        }
        assert_eq!(to_seconds(&to_timestamp(12.75).unwrap()).unwrap(), 12.0);
    }
}
