//! Concatenation of already rendered clips

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::Toolchain;
use crate::error::{ReelError, ReelResult};
use crate::ports::OutputSinks;
use crate::probe::inspector::check_readable;
use crate::utils::path::{directory_of, file_name_of};

/// File name of the concat demuxer list, written next to the first clip
pub const MANIFEST_FILE_NAME: &str = "concat.txt";

/// An ordered list of clips to join into one file.
///
/// Clips are joined with stream copy, so they should share codecs and
/// dimensions (e.g. all rendered by [`VideoSource`](crate::VideoSource)
/// with the same settings).
#[derive(Debug, Clone)]
pub struct ClipList {
    clips: Vec<PathBuf>,
    manifest_path: PathBuf,
    toolchain: Toolchain,
}

impl ClipList {
    /// Validate `clips` against the system toolchain
    pub fn new<I, P>(clips: I) -> ReelResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new_with(clips, Toolchain::system())
    }

    /// Validate `clips` against the given toolchain. Every clip must exist.
    pub fn new_with<I, P>(clips: I, toolchain: Toolchain) -> ReelResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let clips: Vec<PathBuf> = clips.into_iter().map(Into::into).collect();
        let first = clips.first().ok_or(ReelError::EmptyClipList)?;

        toolchain.require_ffprobe()?;
        for clip in &clips {
            check_readable(clip)?;
        }

        let manifest_path = directory_of(first).join(MANIFEST_FILE_NAME);
        Ok(Self {
            clips,
            manifest_path,
            toolchain,
        })
    }

    pub fn clips(&self) -> &[PathBuf] {
        &self.clips
    }

    /// Where the concat list is written while ffmpeg runs
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Manifest contents: one `file '<name>'` line per clip, in order.
    /// Names are relative to the manifest's directory.
    pub fn manifest(&self) -> String {
        self.clips
            .iter()
            .map(|clip| format!("file '{}'\n", quote_for_concat(&file_name_of(clip))))
            .collect()
    }

    /// Where the joined file is written: `output`'s file name inside the
    /// first clip's directory. Any directory in `output` is ignored.
    pub fn output_path(&self, output: impl AsRef<Path>) -> PathBuf {
        directory_of(&self.clips[0]).join(file_name_of(output.as_ref()))
    }

    /// The ffmpeg command line that [`ClipList::concatenate`] would run
    pub fn command_line(&self, output: impl AsRef<Path>) -> Vec<String> {
        vec![
            self.toolchain.ffmpeg().to_string(),
            "-y".to_string(),
            "-f".to_string(),
            "concat".to_string(),
            "-i".to_string(),
            self.manifest_path.to_string_lossy().into_owned(),
            "-c".to_string(),
            "copy".to_string(),
            "-fflags".to_string(),
            "+genpts".to_string(),
            self.output_path(output).to_string_lossy().into_owned(),
        ]
    }

    /// Join all clips into `output`. ffmpeg's output is discarded.
    pub fn concatenate(&self, output: impl AsRef<Path>) -> ReelResult<()> {
        self.concatenate_with_streams(output, OutputSinks::discard())
    }

    /// Join all clips into `output`, forwarding ffmpeg's stdout and stderr
    /// into `sinks`. The manifest is removed afterwards whatever the outcome.
    pub fn concatenate_with_streams(
        &self,
        output: impl AsRef<Path>,
        sinks: OutputSinks<'_>,
    ) -> ReelResult<()> {
        let argv = self.command_line(output.as_ref());
        let _manifest = ManifestFile::write(&self.manifest_path, &self.manifest())?;

        debug!(command = ?argv, "compiled concat command");
        info!(
            "Concatenating {} clips -> {}",
            self.clips.len(),
            argv[argv.len() - 1]
        );

        self.toolchain
            .process()
            .run(&argv, sinks)
            .map_err(|source| ReelError::ExecutionFailed {
                tool: self.toolchain.ffmpeg().to_string(),
                source,
            })?;

        info!("Concatenation completed");
        Ok(())
    }
}

/// Escape a name for use inside single quotes in a concat list
fn quote_for_concat(name: &str) -> String {
    name.replace('\'', r"'\''")
}

/// The manifest on disk; deleted when dropped
struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    fn write(path: &Path, contents: &str) -> ReelResult<Self> {
        let write_error = |source| ReelError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        // From here on a partial file is ours to remove
        let guard = Self {
            path: path.to_path_buf(),
        };

        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes()).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        debug!(path = %path.display(), "wrote concat manifest");
        Ok(guard)
    }
}

impl Drop for ManifestFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("Failed to remove concat manifest {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_for_concat() {
        assert_eq!(quote_for_concat("plain.mp4"), "plain.mp4");
        assert_eq!(quote_for_concat("it's.mp4"), r"it'\''s.mp4");
    }

    #[test]
    fn test_manifest_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        {
            let _guard = ManifestFile::write(&path, "file 'a.mp4'\n").unwrap();
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "file 'a.mp4'\n");
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_manifest_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(MANIFEST_FILE_NAME);
        let result = ManifestFile::write(&path, "file 'a.mp4'\n");
        assert!(matches!(result, Err(ReelError::ManifestWrite { .. })));
        assert!(!path.exists());
    }
}
