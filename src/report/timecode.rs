use crate::track::Interval;
use thiserror::Error;

/// Failures while parsing `MM:SS.s` text back into time offsets
#[derive(Debug, Error)]
pub enum TimecodeError {
    #[error("malformed timecode: {0:?}")]
    MalformedOffset(String),
    #[error("malformed timecode range: {0:?}")]
    MalformedRange(String),
}

/// Formats a time offset in seconds as `MM:SS.s`, e.g. 75.3 -> "01:15.3"
pub fn format_offset(t: f64) -> String {
    let minutes = (t / 60.0).floor();
    let seconds = t - minutes * 60.0;
    format!("{:02.0}:{:04.1}", minutes, seconds)
}

/// Formats an interval as a list row, e.g. "From 01:15.3 to 01:20.0".
/// This text shape is a contract with callers that round-trip through it
/// to seek playback.
pub fn format_range(interval: &Interval) -> String {
    format!(
        "From {} to {}",
        format_offset(interval.start),
        format_offset(interval.end)
    )
}

/// Parses an `MM:SS.s` timecode back into a second offset
pub fn parse_offset(text: &str) -> Result<f64, TimecodeError> {
    let (minutes, seconds) = text
        .split_once(':')
        .ok_or_else(|| TimecodeError::MalformedOffset(text.to_string()))?;
    let minutes: f64 = minutes
        .parse()
        .map_err(|_| TimecodeError::MalformedOffset(text.to_string()))?;
    let seconds: f64 = seconds
        .parse()
        .map_err(|_| TimecodeError::MalformedOffset(text.to_string()))?;
    if minutes < 0.0 || !(0.0..60.0).contains(&seconds) {
        return Err(TimecodeError::MalformedOffset(text.to_string()));
    }
    Ok(minutes * 60.0 + seconds)
}

/// Parses a "From MM:SS.s to MM:SS.s" row back into an interval, from
/// which a playback seek request (start offset, duration) follows directly
pub fn parse_range(text: &str) -> Result<Interval, TimecodeError> {
    let rest = text
        .strip_prefix("From ")
        .ok_or_else(|| TimecodeError::MalformedRange(text.to_string()))?;
    let (start, end) = rest
        .split_once(" to ")
        .ok_or_else(|| TimecodeError::MalformedRange(text.to_string()))?;
    Ok(Interval::new(parse_offset(start)?, parse_offset(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0.0), "00:00.0");
        assert_eq!(format_offset(5.2), "00:05.2");
        assert_eq!(format_offset(75.3), "01:15.3");
        assert_eq!(format_offset(600.0), "10:00.0");
    }

    #[test]
    fn test_format_range() {
        let interval = Interval::new(75.3, 80.0);
        assert_eq!(format_range(&interval), "From 01:15.3 to 01:20.0");
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("00:00.0").unwrap(), 0.0);
        assert!((parse_offset("01:15.3").unwrap() - 75.3).abs() < 1e-9);
        assert!(parse_offset("1:72.0").is_err());
        assert!(parse_offset("nonsense").is_err());
        assert!(parse_offset("0300").is_err());
    }

    #[test]
    fn test_offset_round_trip_at_tenth_precision() {
        for &t in &[0.0, 0.1, 59.9, 60.0, 61.5, 754.2, 3599.9] {
            let parsed = parse_offset(&format_offset(t)).unwrap();
            assert!((parsed - t).abs() < 0.05, "round trip drifted for {}", t);
        }
    }

    #[test]
    fn test_range_round_trip() {
        let interval = Interval::new(120.4, 127.9);
        let parsed = parse_range(&format_range(&interval)).unwrap();
        assert!((parsed.start - interval.start).abs() < 0.05);
        assert!((parsed.end - interval.end).abs() < 0.05);
        assert!((parsed.duration() - interval.duration()).abs() < 0.1);
    }

    #[test]
    fn test_parse_range_rejects_malformed() {
        assert!(parse_range("01:00.0 to 02:00.0").is_err());
        assert!(parse_range("From 01:00.0 until 02:00.0").is_err());
    }
}
