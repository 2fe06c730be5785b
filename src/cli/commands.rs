//! Command implementations

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::app::Toolchain;
use crate::cli::args::{ConcatArgs, EditArgs, ProbeArgs};
use crate::domain::model::MediaProbe;
use crate::domain::rules::format_seconds;
use crate::engine::{ClipList, VideoSource};
use crate::ports::OutputSinks;
use crate::probe::FfprobeInspector;
use crate::utils::path::derive_output_name;
use crate::utils::TimeParser;

/// Execute the probe command
pub fn probe(args: ProbeArgs, toolchain: &Toolchain) -> Result<()> {
    info!("Starting probe operation");
    info!("Input: {}", args.input.display());

    let probe = FfprobeInspector::new(toolchain)
        .inspect(&args.input)
        .context("Failed to inspect input file")?;

    if args.json {
        let json = serde_json::to_string_pretty(&ProbeSummary::new(&probe))
            .context("Failed to serialize probe result to JSON")?;
        println!("{}", json);
    } else {
        display_probe(&args.input.display().to_string(), &probe);
    }

    info!("Probe operation completed successfully");
    Ok(())
}

/// Execute the edit command
pub fn edit(args: EditArgs, toolchain: &Toolchain) -> Result<()> {
    info!("Starting edit operation");
    info!("Input: {}", args.input.display());

    let mut video = VideoSource::load_with(&args.input, toolchain.clone())
        .context("Failed to load input file")?;

    for step in &args.edits {
        info!("Applying edit: {:?}", step);
        step.apply(&mut video);
    }

    let output = args
        .output
        .unwrap_or_else(|| derive_output_name(&args.input));
    info!(
        "Selected range: {} - {}",
        TimeParser::format_time(video.start()),
        TimeParser::format_time(video.end())
    );

    if args.print {
        println!("{}", shell_line(&video.command_line(&output)));
        return Ok(());
    }

    let mut stderr = io::stderr();
    let sinks = if args.verbose_ffmpeg {
        OutputSinks::stderr_only(&mut stderr)
    } else {
        OutputSinks::discard()
    };
    video
        .render_with_streams(&output, sinks)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    info!("Edit operation completed successfully");
    Ok(())
}

/// Execute the concat command
pub fn concat(args: ConcatArgs, toolchain: &Toolchain) -> Result<()> {
    info!("Starting concat operation with {} clips", args.clips.len());

    let clips = ClipList::new_with(args.clips, toolchain.clone())
        .context("Failed to validate clips")?;

    if args.print {
        print!("{}", clips.manifest());
        println!("{}", shell_line(&clips.command_line(&args.output)));
        return Ok(());
    }

    let mut stderr = io::stderr();
    let sinks = if args.verbose_ffmpeg {
        OutputSinks::stderr_only(&mut stderr)
    } else {
        OutputSinks::discard()
    };
    clips
        .concatenate_with_streams(&args.output, sinks)
        .context("Failed to concatenate clips")?;

    info!(
        "Concat operation completed: {}",
        clips.output_path(&args.output).display()
    );
    Ok(())
}

/// Probe result as printed by `probe --json`
#[derive(Debug, Serialize)]
struct ProbeSummary {
    duration_seconds: String,
    width: u32,
    height: u32,
    bitrate: u64,
    rotation: Option<i64>,
}

impl ProbeSummary {
    fn new(probe: &MediaProbe) -> Self {
        Self {
            duration_seconds: format_seconds(probe.duration),
            width: probe.width,
            height: probe.height,
            bitrate: probe.bitrate,
            rotation: probe.rotation,
        }
    }
}

/// Display probe information in human-readable format
fn display_probe(path: &str, probe: &MediaProbe) {
    println!("Media Information");
    println!("=================");
    println!("File: {}", path);
    println!("Duration: {}", TimeParser::format_time(probe.duration));
    println!("Dimensions: {}x{}", probe.width, probe.height);
    println!("Bit Rate: {} bps", probe.bitrate);
    if let Some(rotation) = probe.rotation {
        println!("Rotation: {} degrees", rotation);
    }
}

/// Join an argument vector into one line, quoting where a shell would need it
fn shell_line(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            let plain = !arg.is_empty()
                && arg
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "-_.,:=/+@%".contains(c));
            if plain {
                arg.clone()
            } else {
                format!("'{}'", arg.replace('\'', r"'\''"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
