// Domain models - Core types and data structures

use std::fmt;
use std::time::Duration;

use serde::Serialize;


/// Clamped trim bounds relative to the original source.
///
/// Start and end are updated together so that
/// `0 <= start <= end <= ceiling` holds after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimWindow {
    start: Duration,
    end: Duration,
    ceiling: Duration,
}

impl TrimWindow {
    /// Create a window spanning the whole source
    pub fn new(ceiling: Duration) -> Self {
        Self {
            start: Duration::ZERO,
            end: ceiling,
            ceiling,
        }
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn end(&self) -> Duration {
        self.end
    }

    /// Duration of the original source
    pub fn ceiling(&self) -> Duration {
        self.ceiling
    }

    /// Length of the selected range
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Move the start bound. The end bound follows when overtaken.
    pub fn move_start(&mut self, start: Duration) {
        let start = self.clamp(start);
        self.update(start, self.end.max(start));
    }

    /// Move the end bound. The start bound follows when overtaken.
    pub fn move_end(&mut self, end: Duration) {
        let end = self.clamp(end);
        self.update(self.start.min(end), end);
    }

    /// Set both bounds; an inverted range leaves the window untouched.
    pub fn select(&mut self, start: Duration, end: Duration) {
        if start <= end {
            self.move_start(start);
            self.move_end(end);
        }
    }

    fn update(&mut self, start: Duration, end: Duration) {
        debug_assert!(start <= end && end <= self.ceiling);
        self.start = start;
        self.end = end;
    }

    fn clamp(&self, t: Duration) -> Duration {
        t.min(self.ceiling)
    }
}

/// One unit of the video filter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FilterFragment {
    /// Resize to the given dimensions
    Scale { width: u32, height: u32 },
    /// Keep a `width`x`height` rectangle whose top-left corner is at (`x`, `y`)
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for FilterFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterFragment::Scale { width, height } => write!(f, "scale={}:{}", width, height),
            FilterFragment::Crop { x, y, width, height } => {
                write!(f, "crop={}:{}:{}:{}", width, height, x, y)
            }
        }
    }
}

/// Intrinsic properties of a probed media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaProbe {
    /// Duration of the whole file
    pub duration: Duration,
    /// Display width in pixels, already corrected for rotation
    pub width: u32,
    /// Display height in pixels, already corrected for rotation
    pub height: u32,
    /// Container bitrate in bits/second, 0 when not reported
    pub bitrate: u64,
    /// Rotation of the selected stream in degrees
    pub rotation: Option<i64>,
}
