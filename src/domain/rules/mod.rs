// Domain rules - Policies applied to probe results

use std::time::Duration;

/// Picks the stream whose dimensions describe the picture
pub struct StreamSelector;

impl StreamSelector {
    /// Index of the first stream with non-zero width and height.
    ///
    /// Audio-only and metadata streams report zero dimensions and are
    /// skipped. When no stream qualifies the first stream (index 0) is used
    /// anyway, so the caller ends up with zero dimensions rather than an
    /// error.
    pub fn select<I>(dimensions: I) -> usize
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        dimensions
            .into_iter()
            .position(|(width, height)| width != 0 && height != 0)
            .unwrap_or(0)
    }
}

/// Corrects reported dimensions for sensor rotation
pub struct RotationRule;

impl RotationRule {
    /// Frame dimensions are reported before rotation. A rotation of an odd
    /// number of quarter turns (-270, -90, 90, 270, ...) swaps them.
    pub fn orient(width: u32, height: u32, rotation: Option<i64>) -> (u32, u32) {
        match rotation {
            Some(degrees) if (degrees / 90) % 2 != 0 => (height, width),
            _ => (width, height),
        }
    }
}

/// Convert fractional seconds to a whole-nanosecond duration, rounding half up.
/// Negative input yields zero. The caller must pass a finite value.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    let nanos = seconds * 1e9 + 0.5;
    if nanos <= 0.0 {
        return Duration::ZERO;
    }
    // `as` saturates at u64::MAX for absurdly long inputs
    Duration::from_nanos(nanos as u64)
}

/// Render a duration as seconds using the shortest decimal that round-trips
/// (`10`, `1.5`, `0.000000001`).
pub fn format_seconds(duration: Duration) -> String {
    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if nanos == 0 {
        return secs.to_string();
    }
    let fraction = format!("{:09}", nanos);
    format!("{}.{}", secs, fraction.trim_end_matches('0'))
}
