//! ffprobe invocation

use std::path::Path;

use tracing::info;

use crate::app::Toolchain;
use crate::domain::model::MediaProbe;
use crate::error::{ReelError, ReelResult};
use crate::probe::ReportValidator;

/// Probes media files with ffprobe
pub struct FfprobeInspector<'a> {
    toolchain: &'a Toolchain,
}

impl<'a> FfprobeInspector<'a> {
    pub fn new(toolchain: &'a Toolchain) -> Self {
        Self { toolchain }
    }

    /// Argument vector asking for a quiet JSON report of format and streams
    pub fn command_line(&self, path: &Path) -> Vec<String> {
        vec![
            self.toolchain.ffprobe().to_string(),
            "-v".to_string(),
            "quiet".to_string(),
            "-print_format".to_string(),
            "json".to_string(),
            "-show_format".to_string(),
            "-show_streams".to_string(),
            path.to_string_lossy().into_owned(),
        ]
    }

    /// Probe a media file for duration, dimensions and bitrate
    pub fn inspect(&self, path: &Path) -> ReelResult<MediaProbe> {
        self.toolchain.require_ffprobe()?;
        check_readable(path)?;

        info!("Inspecting media file: {}", path.display());
        let output = self
            .toolchain
            .process()
            .capture(&self.command_line(path))
            .map_err(|source| ReelError::ProbeExecution {
                path: path.to_path_buf(),
                source,
            })?;

        ReportValidator::parse(path, &output)
    }
}

/// Fail with `FileNotFound` unless `path` can be opened
pub fn check_readable(path: &Path) -> ReelResult<()> {
    std::fs::metadata(path)
        .and_then(|_| std::fs::File::open(path).map(drop))
        .map_err(|e| ReelError::FileNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
