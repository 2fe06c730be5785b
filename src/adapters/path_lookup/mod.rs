//! Executable lookup adapter
//!
//! Resolves program names against the `PATH` environment variable.

use std::path::PathBuf;

use crate::ports::ToolLocator;

/// Locates executables the way a shell would
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLookup;

impl PathLookup {
    /// Create new lookup adapter
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathLookup {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        // Names containing a path separator are checked in place, not on PATH
        which::which(program).ok()
    }
}
