//! reelcut video command builder library
//!
//! Describe edits to a source video (trim, resize, crop, frame rate,
//! bitrate, mute) and turn them into a single ffmpeg invocation, or join
//! rendered clips with ffmpeg's concat demuxer.
//!
//! ```no_run
//! use std::time::Duration;
//! use reelcut::{ClipList, VideoSource};
//!
//! let mut video = VideoSource::load("example.mp4")?;
//! video.trim(Duration::from_secs(10), Duration::from_secs(20));
//! video.set_size(400, 300);
//! video.crop(0, 0, 200, 200);
//! video.set_frame_rate(48);
//! video.render("part1.mov")?;
//!
//! let clips = ClipList::new(["part1.mov", "part2.mov"])?;
//! clips.concatenate("joined.mov")?;
//! # Ok::<(), reelcut::ReelError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use app::Toolchain;
pub use domain::model::{FilterFragment, MediaProbe, TrimWindow};
pub use engine::{ClipList, VideoSource};
pub use error::{ProcessFailure, ReelError, ReelResult};
pub use ports::{OutputSinks, ProcessPort, ToolLocator};
