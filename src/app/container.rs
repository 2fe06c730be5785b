use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{PathLookup, ReelConfig, SystemProcess};
use crate::error::{ReelError, ReelResult};
use crate::ports::{ProcessPort, ToolLocator};

/// The external programs and the ports used to find and run them.
///
/// Cloning is cheap; every `VideoSource` and `ClipList` keeps its own copy.
#[derive(Clone)]
pub struct Toolchain {
    ffmpeg: String,
    ffprobe: String,
    default_frame_rate: u32,
    process: Arc<dyn ProcessPort>,
    locator: Arc<dyn ToolLocator>,
}

impl Toolchain {
    /// `ffmpeg`/`ffprobe` from PATH, run as real subprocesses
    pub fn system() -> Self {
        Self::from_config(&ReelConfig::default())
    }

    pub fn from_config(config: &ReelConfig) -> Self {
        Self {
            ffmpeg: config.ffmpeg.clone(),
            ffprobe: config.ffprobe.clone(),
            default_frame_rate: config.default_frame_rate,
            process: Arc::new(SystemProcess::new()),
            locator: Arc::new(PathLookup::new()),
        }
    }

    /// Replace the process port
    pub fn with_process(mut self, process: Arc<dyn ProcessPort>) -> Self {
        self.process = process;
        self
    }

    /// Replace the executable lookup port
    pub fn with_locator(mut self, locator: Arc<dyn ToolLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn ffmpeg(&self) -> &str {
        &self.ffmpeg
    }

    pub fn ffprobe(&self) -> &str {
        &self.ffprobe
    }

    pub fn default_frame_rate(&self) -> u32 {
        self.default_frame_rate
    }

    pub fn process(&self) -> &dyn ProcessPort {
        self.process.as_ref()
    }

    /// Resolve the probe program, failing with `ToolNotFound`
    pub fn require_ffprobe(&self) -> ReelResult<PathBuf> {
        self.locator
            .locate(&self.ffprobe)
            .ok_or_else(|| ReelError::ToolNotFound {
                tool: self.ffprobe.clone(),
            })
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolchain")
            .field("ffmpeg", &self.ffmpeg)
            .field("ffprobe", &self.ffprobe)
            .field("default_frame_rate", &self.default_frame_rate)
            .finish_non_exhaustive()
    }
}
