//! Command-line argument definitions

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Args;

use crate::engine::VideoSource;
use crate::error::ReelError;
use crate::utils::TimeParser;

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path; the extension picks the format (default: <input>_edit.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Edit step, applied in the order given: trim=A-B, start=T, end=T,
    /// size=WxH, crop=X:Y:W:H, fps=N, bitrate=N, mute
    #[arg(short, long = "edit", value_name = "STEP")]
    pub edits: Vec<EditStep>,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub print: bool,

    /// Show ffmpeg's output while rendering
    #[arg(long)]
    pub verbose_ffmpeg: bool,
}

/// Arguments for the concat command
#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// Clips to join, in order
    #[arg(required = true)]
    pub clips: Vec<PathBuf>,

    /// Output file name, written next to the first clip
    #[arg(short, long)]
    pub output: PathBuf,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub print: bool,

    /// Show ffmpeg's output while concatenating
    #[arg(long)]
    pub verbose_ffmpeg: bool,
}

/// One edit given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    Trim { start: Duration, end: Duration },
    Start(Duration),
    End(Duration),
    Size { width: u32, height: u32 },
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    FrameRate(u32),
    Bitrate(u64),
    Mute,
}

impl EditStep {
    /// Apply this step to a source
    pub fn apply(&self, video: &mut VideoSource) {
        match *self {
            EditStep::Trim { start, end } => video.trim(start, end),
            EditStep::Start(t) => video.set_start(t),
            EditStep::End(t) => video.set_end(t),
            EditStep::Size { width, height } => video.set_size(width, height),
            EditStep::Crop { x, y, width, height } => video.crop(x, y, width, height),
            EditStep::FrameRate(fps) => video.set_frame_rate(fps),
            EditStep::Bitrate(bitrate) => video.set_bitrate(bitrate),
            EditStep::Mute => video.mute(),
        }
    }
}

fn invalid(step: &str, message: impl Into<String>) -> ReelError {
    ReelError::InvalidEdit {
        step: step.to_string(),
        message: message.into(),
    }
}

fn numbers<T: FromStr>(
    step: &str,
    value: &str,
    separator: char,
    count: usize,
) -> Result<Vec<T>, ReelError> {
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != count {
        return Err(invalid(
            step,
            format!("expected {} numbers separated by '{}'", count, separator),
        ));
    }
    parts
        .iter()
        .map(|p| {
            p.trim()
                .parse::<T>()
                .map_err(|_| invalid(step, format!("'{}' is not a valid number", p)))
        })
        .collect()
}

impl FromStr for EditStep {
    type Err = ReelError;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        let (name, value) = match step.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (step.trim(), None),
        };
        let time =
            |t: &str| TimeParser::parse_time(t).map_err(|e| invalid(step, e.to_string()));

        match (name.to_lowercase().as_str(), value) {
            ("mute", None) => Ok(EditStep::Mute),
            ("trim", Some(v)) => {
                let (start, end) = v
                    .split_once('-')
                    .ok_or_else(|| invalid(step, "expected START-END"))?;
                Ok(EditStep::Trim {
                    start: time(start)?,
                    end: time(end)?,
                })
            }
            ("start", Some(v)) => Ok(EditStep::Start(time(v)?)),
            ("end", Some(v)) => Ok(EditStep::End(time(v)?)),
            ("size", Some(v)) => {
                let dims = numbers::<u32>(step, &v.to_lowercase(), 'x', 2)?;
                Ok(EditStep::Size {
                    width: dims[0],
                    height: dims[1],
                })
            }
            ("crop", Some(v)) => {
                let n = numbers::<u32>(step, v, ':', 4)?;
                Ok(EditStep::Crop {
                    x: n[0],
                    y: n[1],
                    width: n[2],
                    height: n[3],
                })
            }
            ("fps", Some(v)) => Ok(EditStep::FrameRate(numbers::<u32>(step, v, ',', 1)?[0])),
            ("bitrate", Some(v)) => Ok(EditStep::Bitrate(numbers::<u64>(step, v, ',', 1)?[0])),
            _ => Err(invalid(
                step,
                "expected one of trim=A-B, start=T, end=T, size=WxH, crop=X:Y:W:H, fps=N, bitrate=N, mute",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(
            "trim=10-20".parse::<EditStep>().unwrap(),
            EditStep::Trim {
                start: Duration::from_secs(10),
                end: Duration::from_secs(20)
            }
        );
        assert_eq!(
            "start=00:01.5".parse::<EditStep>().unwrap(),
            EditStep::Start(Duration::from_millis(1500))
        );
        assert_eq!(
            "end=9".parse::<EditStep>().unwrap(),
            EditStep::End(Duration::from_secs(9))
        );
        assert_eq!(
            "size=400x300".parse::<EditStep>().unwrap(),
            EditStep::Size {
                width: 400,
                height: 300
            }
        );
        assert_eq!(
            "crop=0:10:200:100".parse::<EditStep>().unwrap(),
            EditStep::Crop {
                x: 0,
                y: 10,
                width: 200,
                height: 100
            }
        );
        assert_eq!("fps=48".parse::<EditStep>().unwrap(), EditStep::FrameRate(48));
        assert_eq!(
            "bitrate=200000".parse::<EditStep>().unwrap(),
            EditStep::Bitrate(200_000)
        );
        assert_eq!("MUTE".parse::<EditStep>().unwrap(), EditStep::Mute);
    }

    #[test]
    fn test_trim_accepts_clock_times() {
        assert_eq!(
            "trim=00:01:00-00:01:30.5".parse::<EditStep>().unwrap(),
            EditStep::Trim {
                start: Duration::from_secs(60),
                end: Duration::from_millis(90_500)
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_steps() {
        let malformed = [
            "",
            "trim=10",
            "size=400",
            "size=axb",
            "crop=1:2:3",
            "fps=-1",
            "mute=1",
            "spin=90",
            "start=",
            "trim=5-x",
            "start=1e20",
            "trim=0-99999999999999999:00:00",
        ];
        for bad in malformed {
            let result = bad.parse::<EditStep>();
            assert!(
                matches!(result, Err(ReelError::InvalidEdit { .. })),
                "{} should be rejected",
                bad
            );
        }
    }
}
