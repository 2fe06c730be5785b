// Ports - Interface definitions (contracts)

use std::io::Write;
use std::path::PathBuf;

use crate::error::ProcessFailure;

/// Optional destinations for a child process's output streams.
///
/// A missing sink means the stream is discarded.
#[derive(Default)]
pub struct OutputSinks<'a> {
    pub stdout: Option<&'a mut (dyn Write + Send)>,
    pub stderr: Option<&'a mut (dyn Write + Send)>,
}

impl<'a> OutputSinks<'a> {
    /// Discard both streams
    pub fn discard() -> Self {
        Self::default()
    }

    /// Forward both streams into the given writers
    pub fn new(stdout: &'a mut (dyn Write + Send), stderr: &'a mut (dyn Write + Send)) -> Self {
        Self {
            stdout: Some(stdout),
            stderr: Some(stderr),
        }
    }

    /// Forward only standard error, where ffmpeg reports progress
    pub fn stderr_only(stderr: &'a mut (dyn Write + Send)) -> Self {
        Self {
            stdout: None,
            stderr: Some(stderr),
        }
    }
}

/// Port for running external programs.
///
/// `argv[0]` is the program, the rest are its arguments. Both methods block
/// until the child exits.
pub trait ProcessPort: Send + Sync {
    /// Run to completion, forwarding output into `sinks`
    fn run(&self, argv: &[String], sinks: OutputSinks<'_>) -> Result<(), ProcessFailure>;

    /// Run to completion and return everything written to standard output
    fn capture(&self, argv: &[String]) -> Result<Vec<u8>, ProcessFailure>;
}

/// Port for resolving executables
pub trait ToolLocator: Send + Sync {
    /// Full path of `program`, or `None` when it cannot be found
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
