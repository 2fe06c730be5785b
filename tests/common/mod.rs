//! Test doubles for the process and lookup ports
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reelcut::{OutputSinks, ProcessFailure, ProcessPort, ToolLocator, Toolchain};

/// Finds every tool, or none
pub struct FakeLocator {
    pub present: bool,
}

impl ToolLocator for FakeLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.present.then(|| PathBuf::from("/usr/bin").join(program))
    }
}

/// Scripted process port.
///
/// `capture` returns the canned probe report. `run` records the command,
/// snapshots the file named after `-i` (the concat manifest) and then
/// succeeds or fails with the configured exit code.
#[derive(Default)]
pub struct ScriptedProcess {
    pub probe_json: String,
    pub exit_code: Option<i32>,
    pub stderr_text: String,
    pub runs: Mutex<Vec<Vec<String>>>,
    pub inputs_seen: Mutex<Vec<Option<String>>>,
}

impl ScriptedProcess {
    pub fn with_probe(json: &str) -> Self {
        Self {
            probe_json: json.to_string(),
            ..Default::default()
        }
    }

    pub fn failing(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn last_run(&self) -> Vec<String> {
        self.runs.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl ProcessPort for ScriptedProcess {
    fn run(&self, argv: &[String], sinks: OutputSinks<'_>) -> Result<(), ProcessFailure> {
        self.runs.lock().unwrap().push(argv.to_vec());

        let input = argv
            .iter()
            .position(|a| a == "-i")
            .and_then(|i| argv.get(i + 1))
            .and_then(|p| std::fs::read_to_string(Path::new(p)).ok());
        self.inputs_seen.lock().unwrap().push(input);

        if let Some(stderr) = sinks.stderr {
            stderr.write_all(self.stderr_text.as_bytes()).map_err(ProcessFailure::Stream)?;
        }

        match self.exit_code {
            Some(code) => Err(ProcessFailure::Status { code: Some(code) }),
            None => Ok(()),
        }
    }

    fn capture(&self, _argv: &[String]) -> Result<Vec<u8>, ProcessFailure> {
        Ok(self.probe_json.clone().into_bytes())
    }
}

pub fn toolchain(process: &Arc<ScriptedProcess>) -> Toolchain {
    Toolchain::system()
        .with_process(Arc::clone(process) as Arc<dyn ProcessPort>)
        .with_locator(Arc::new(FakeLocator { present: true }))
}

pub fn toolchain_without_tools(process: &Arc<ScriptedProcess>) -> Toolchain {
    Toolchain::system()
        .with_process(Arc::clone(process) as Arc<dyn ProcessPort>)
        .with_locator(Arc::new(FakeLocator { present: false }))
}

/// Probe report of a 60 second 1280x720 video with an audio track
pub const SIXTY_SECOND_REPORT: &str = r#"{
    "streams": [
        {"index": 0, "codec_type": "audio", "sample_rate": "48000", "channels": 2},
        {"index": 1, "codec_type": "video", "width": 1280, "height": 720}
    ],
    "format": {"filename": "source.mp4", "duration": "60.000000", "bit_rate": "2500000"}
}"#;

/// Create an empty file standing in for a video
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake video data").unwrap();
    path
}
