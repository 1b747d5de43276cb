//! Clock drift between a reference reading and an observed one.

use crate::error::{Result, ShadowError};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const DAY_SECONDS: i64 = 24 * 60 * 60;

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*$").expect("clock pattern compiles")
    })
}

/// Parses `HH:MM` or `HH:MM:SS` on a 24 hour dial.
pub fn parse_clock(text: &str) -> Result<NaiveTime> {
    let caps = clock_pattern()
        .captures(text)
        .ok_or_else(|| ShadowError::Clock(format!("'{text}' is not HH:MM or HH:MM:SS")))?;

    let field = |i: usize| -> u32 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    NaiveTime::from_hms_opt(field(1), field(2), field(3))
        .ok_or_else(|| ShadowError::Clock(format!("'{text}' is out of range")))
}

/// Signed drift in seconds; positive means the observed clock runs ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drift {
    pub seconds: i64,
}

/// Shortest signed difference on the dial, in (-12h, +12h].
pub fn measure(reference: NaiveTime, observed: NaiveTime) -> Drift {
    let raw = observed.num_seconds_from_midnight() as i64
        - reference.num_seconds_from_midnight() as i64;
    let mut seconds = raw.rem_euclid(DAY_SECONDS);
    if seconds > DAY_SECONDS / 2 {
        seconds -= DAY_SECONDS;
    }
    Drift { seconds }
}

pub fn measure_str(reference: &str, observed: &str) -> Result<Drift> {
    Ok(measure(parse_clock(reference)?, parse_clock(observed)?))
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            return write!(f, "in sync");
        }
        let total = self.seconds.abs();
        let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
        if h > 0 {
            write!(f, "{h}h {m}m {s}s")?;
        } else if m > 0 {
            write!(f, "{m}m {s}s")?;
        } else {
            write!(f, "{s}s")?;
        }
        let direction = if self.seconds > 0 { "fast" } else { "slow" };
        write!(f, " {direction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_seconds() {
        assert_eq!(parse_clock("9:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(
            parse_clock(" 23:59:58 ").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 58).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_and_out_of_range() {
        for bad in ["", "noon", "12", "12:5", "24:00", "12:60", "12:00:61x"] {
            assert!(
                matches!(parse_clock(bad), Err(ShadowError::Clock(_))),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn reports_fast_and_slow() {
        let fast = measure_str("12:00:00", "12:03:15").unwrap();
        assert_eq!(fast.seconds, 195);
        assert_eq!(fast.to_string(), "3m 15s fast");

        let slow = measure_str("12:00:00", "10:59:58").unwrap();
        assert_eq!(slow.to_string(), "1h 0m 2s slow");

        assert_eq!(measure_str("08:00", "08:00:00").unwrap().to_string(), "in sync");
        assert_eq!(measure_str("08:00", "07:59:30").unwrap().to_string(), "30s slow");
    }

    #[test]
    fn wraps_around_midnight() {
        assert_eq!(measure_str("23:59", "00:01").unwrap().seconds, 120);
        assert_eq!(measure_str("00:01", "23:59").unwrap().seconds, -120);
        assert_eq!(measure_str("00:00", "12:00").unwrap().seconds, 12 * 3600);
    }
}
