//! Error handling module for reelcut

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for reelcut operations
#[derive(Error, Debug)]
pub enum ReelError {
    /// A required executable could not be located
    #[error("{tool} was not found in your PATH, make sure ffmpeg (https://ffmpeg.org/) is installed and ffmpeg/ffprobe are on PATH")]
    ToolNotFound { tool: String },

    /// Input file not found or inaccessible
    #[error("Unable to load file {}: {reason}", path.display())]
    FileNotFound { path: PathBuf, reason: String },

    /// The probe tool did not run to completion
    #[error("ffprobe failed on {}: {source}", path.display())]
    ProbeExecution {
        path: PathBuf,
        #[source]
        source: ProcessFailure,
    },

    /// The probe report could not be decoded or holds no usable stream
    #[error("Malformed probe output for {}: {message}", path.display())]
    MalformedProbeOutput { path: PathBuf, message: String },

    /// The transcoding tool did not run to completion
    #[error("{tool} failed: {source}")]
    ExecutionFailed {
        tool: String,
        #[source]
        source: ProcessFailure,
    },

    /// The concat manifest could not be written
    #[error("Failed to write concat manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A clip list was built from no paths
    #[error("At least one clip is required for concatenation")]
    EmptyClipList,

    /// Invalid time format
    #[error("Invalid time format: {time}. Expected HH:MM:SS.ms, MM:SS.ms, or seconds")]
    InvalidTimeFormat { time: String },

    /// An edit step given on the command line could not be parsed
    #[error("Invalid edit step '{step}': {message}")]
    InvalidEdit { step: String, message: String },

    /// Configuration loading or validation error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Why an external process did not complete successfully
#[derive(Error, Debug)]
pub enum ProcessFailure {
    /// The process could not be started
    #[error("could not start process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The process exited with a non-zero status (`None` when killed by a signal)
    #[error("process exited with {}", describe_exit(.code))]
    Status { code: Option<i32> },

    /// Forwarding the child's output into a caller sink failed
    #[error("forwarding process output failed: {0}")]
    Stream(#[source] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type alias for reelcut operations
pub type ReelResult<T> = std::result::Result<T, ReelError>;
