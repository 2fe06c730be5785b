//! Time parsing and formatting utilities

use std::time::Duration;

use crate::error::{ReelError, ReelResult};

/// Time parser for `SS.ms`, `MM:SS.ms` and `HH:MM:SS.ms`
pub struct TimeParser;

impl TimeParser {
    /// Parse time string to a duration
    pub fn parse_time(time_str: &str) -> ReelResult<Duration> {
        let trimmed = time_str.trim();
        let invalid = || ReelError::InvalidTimeFormat {
            time: time_str.to_string(),
        };

        let parts: Vec<&str> = trimmed.split(':').collect();
        let (hours, minutes, seconds) = match parts.as_slice() {
            [s] => (0, 0, Self::parse_seconds(s).ok_or_else(invalid)?),
            [m, s] => (
                0,
                Self::parse_whole(m).ok_or_else(invalid)?,
                Self::parse_seconds(s).filter(|s| *s < 60.0).ok_or_else(invalid)?,
            ),
            [h, m, s] => (
                Self::parse_whole(h).ok_or_else(invalid)?,
                Self::parse_whole(m).filter(|m| *m < 60).ok_or_else(invalid)?,
                Self::parse_seconds(s).filter(|s| *s < 60.0).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };

        let whole = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
            .map(Duration::from_secs)
            .ok_or_else(invalid)?;
        Duration::try_from_secs_f64(seconds)
            .ok()
            .and_then(|fraction| whole.checked_add(fraction))
            .ok_or_else(invalid)
    }

    fn parse_whole(part: &str) -> Option<u64> {
        part.parse().ok()
    }

    fn parse_seconds(part: &str) -> Option<f64> {
        part.parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
    }

    /// Format a duration as `HH:MM:SS.mmm`
    pub fn format_time(duration: Duration) -> String {
        let total = duration.as_secs();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            total / 3600,
            (total % 3600) / 60,
            total % 60,
            duration.subsec_millis()
        )
    }
}
