//! CLI module for reelcut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// reelcut video command builder
///
/// Trim, resize, crop and concatenate videos by building ffmpeg command lines.
#[derive(Parser, Debug)]
#[command(name = "reelcut")]
#[command(about = "Build and run ffmpeg command lines for simple video edits")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level or filter directive
    #[arg(long, global = true, env = "REELCUT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, global = true, env = "REELCUT_LOG_FORMAT")]
    pub log_format: Option<String>,

    /// Configuration file (default: ./reelcut.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// ffmpeg program name or path
    #[arg(long, global = true, env = "REELCUT_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// ffprobe program name or path
    #[arg(long, global = true, env = "REELCUT_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Output frame rate used unless an edit sets one
    #[arg(long, global = true, env = "REELCUT_DEFAULT_FPS")]
    pub default_fps: Option<u32>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show duration, dimensions and bitrate of a video
    Probe(args::ProbeArgs),
    /// Apply edits to a video and render it
    Edit(args::EditArgs),
    /// Join rendered clips into one file
    Concat(args::ConcatArgs),
}
