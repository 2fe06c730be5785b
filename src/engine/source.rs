//! Edit accumulator for a single source video

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::app::Toolchain;
use crate::domain::model::{FilterFragment, MediaProbe, TrimWindow};
use crate::domain::rules::format_seconds;
use crate::error::{ReelError, ReelResult};
use crate::ports::OutputSinks;
use crate::probe::FfprobeInspector;

/// Flag that drops every audio stream from the output
pub const MUTE_FLAG: &str = "-an";

/// A source video and the edits to apply to it.
///
/// Loading does not read the file into memory; it only probes it. Edits
/// never fail: out-of-range times are clamped. Call [`VideoSource::render`]
/// to produce the output, or [`VideoSource::command_line`] to see what would
/// run.
#[derive(Debug, Clone)]
pub struct VideoSource {
    path: PathBuf,
    width: u32,
    height: u32,
    frame_rate: u32,
    bitrate: u64,
    window: TrimWindow,
    filters: Vec<FilterFragment>,
    extra_args: Vec<String>,
    toolchain: Toolchain,
}

impl VideoSource {
    /// Probe `path` with the system ffprobe
    pub fn load(path: impl AsRef<Path>) -> ReelResult<Self> {
        Self::load_with(path, Toolchain::system())
    }

    /// Probe `path` using the given toolchain
    pub fn load_with(path: impl AsRef<Path>, toolchain: Toolchain) -> ReelResult<Self> {
        let path = path.as_ref();
        let probe = FfprobeInspector::new(&toolchain).inspect(path)?;
        Ok(Self::from_probe(path, probe, toolchain))
    }

    /// Build from an already obtained probe result
    pub fn from_probe(path: impl Into<PathBuf>, probe: MediaProbe, toolchain: Toolchain) -> Self {
        Self {
            path: path.into(),
            width: probe.width,
            height: probe.height,
            frame_rate: toolchain.default_frame_rate(),
            bitrate: probe.bitrate,
            window: TrimWindow::new(probe.duration),
            filters: Vec::new(),
            extra_args: Vec::new(),
            toolchain,
        }
    }

    /// Drop all audio from the output
    pub fn mute(&mut self) {
        self.extra_args.push(MUTE_FLAG.to_string());
    }

    /// Keep only `start..end` of the original video. Nothing changes when
    /// `start > end`.
    pub fn trim(&mut self, start: Duration, end: Duration) {
        self.window.select(start, end);
    }

    /// Set the output start, relative to the original video
    pub fn set_start(&mut self, start: Duration) {
        self.window.move_start(start);
    }

    /// Set the output end, relative to the original video
    pub fn set_end(&mut self, end: Duration) {
        self.window.move_end(end);
    }

    pub fn set_frame_rate(&mut self, frame_rate: u32) {
        self.frame_rate = frame_rate;
    }

    pub fn set_bitrate(&mut self, bitrate: u64) {
        self.bitrate = bitrate;
    }

    /// Resize the current picture to `width`x`height`
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.filters.push(FilterFragment::Scale { width, height });
    }

    /// Keep the `width`x`height` rectangle at (`x`, `y`) of the current
    /// picture. (0, 0) is the top-left corner; x goes right, y goes down.
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.filters.push(FilterFragment::Crop { x, y, width, height });
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Duration of the original file, ignoring any trim.
    /// The trimmed length is `end() - start()`.
    pub fn duration(&self) -> Duration {
        self.window.ceiling()
    }

    pub fn start(&self) -> Duration {
        self.window.start()
    }

    pub fn end(&self) -> Duration {
        self.window.end()
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn bitrate(&self) -> u64 {
        self.bitrate
    }

    pub fn filters(&self) -> &[FilterFragment] {
        &self.filters
    }

    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }

    /// The `-vf` value: all fragments in order, then square pixels and the
    /// output frame rate
    pub fn filter_chain(&self) -> String {
        let mut chain: Vec<String> = self.filters.iter().map(ToString::to_string).collect();
        chain.push(format!("setsar=1,fps=fps={}", self.frame_rate));
        chain.join(",")
    }

    /// The ffmpeg command line that [`VideoSource::render`] would run
    pub fn command_line(&self, output: impl AsRef<Path>) -> Vec<String> {
        let mut argv = vec![
            self.toolchain.ffmpeg().to_string(),
            "-y".to_string(),
            "-i".to_string(),
            self.path.to_string_lossy().into_owned(),
            "-ss".to_string(),
            format_seconds(self.window.start()),
            "-t".to_string(),
            format_seconds(self.window.span()),
        ];
        if self.bitrate != 0 {
            argv.push("-vb".to_string());
            argv.push(self.bitrate.to_string());
        }
        argv.extend(self.extra_args.iter().cloned());
        argv.push("-vf".to_string());
        argv.push(self.filter_chain());
        argv.push("-strict".to_string());
        argv.push("-2".to_string());
        argv.push(output.as_ref().to_string_lossy().into_owned());
        argv
    }

    /// Apply all edits and write `output`. ffmpeg's output is discarded.
    pub fn render(&self, output: impl AsRef<Path>) -> ReelResult<()> {
        self.render_with_streams(output, OutputSinks::discard())
    }

    /// Apply all edits and write `output`, forwarding ffmpeg's stdout and
    /// stderr into `sinks`
    pub fn render_with_streams(
        &self,
        output: impl AsRef<Path>,
        sinks: OutputSinks<'_>,
    ) -> ReelResult<()> {
        let output = output.as_ref();
        let argv = self.command_line(output);
        debug!(command = ?argv, "compiled render command");
        info!(
            "Rendering {} -> {}",
            self.path.display(),
            output.display()
        );

        self.toolchain
            .process()
            .run(&argv, sinks)
            .map_err(|source| ReelError::ExecutionFailed {
                tool: self.toolchain.ffmpeg().to_string(),
                source,
            })?;

        info!("Render completed: {}", output.display());
        Ok(())
    }
}
