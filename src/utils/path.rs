//! Path helpers

use std::path::{Path, PathBuf};

/// Directory containing `path`; empty for a bare file name so that joining
/// onto it yields a relative path
pub fn directory_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Final component of `path`, or the whole path when it has none (`..`, `/`)
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Default output name for an edited source: `<stem>_edit.<ext>`
pub fn derive_output_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = input
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mp4".to_string());

    directory_of(input).join(format!("{}_edit.{}", stem, extension))
}
