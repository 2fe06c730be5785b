//! Subprocess execution adapter
//!
//! Runs external programs with `std::process::Command`, forwarding their
//! output streams into caller-supplied sinks when requested.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::error::ProcessFailure;
use crate::ports::{OutputSinks, ProcessPort};

/// Process adapter backed by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl SystemProcess {
    /// Create new process adapter
    pub fn new() -> Self {
        Self
    }

    fn command(argv: &[String]) -> Result<Command, ProcessFailure> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            ProcessFailure::Spawn(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty command line",
            ))
        })?;
        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());
        Ok(command)
    }
}

fn stdio_for(sink: &Option<&mut (dyn Write + Send)>) -> Stdio {
    if sink.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}

/// Copy `pipe` into `sink`. After a sink error the rest of the pipe is
/// drained and discarded so the child never writes into a closed pipe.
fn forward<R: Read>(mut pipe: R, sink: &mut (dyn Write + Send)) -> io::Result<()> {
    let copied = io::copy(&mut pipe, sink).and_then(|_| sink.flush());
    if copied.is_err() {
        io::copy(&mut pipe, &mut io::sink())?;
    }
    copied
}

fn join(handle: Option<thread::ScopedJoinHandle<'_, io::Result<()>>>) -> io::Result<()> {
    match handle {
        Some(handle) => handle.join().unwrap_or_else(|_| {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "output forwarding thread panicked",
            ))
        }),
        None => Ok(()),
    }
}

impl ProcessPort for SystemProcess {
    fn run(&self, argv: &[String], sinks: OutputSinks<'_>) -> Result<(), ProcessFailure> {
        let OutputSinks { stdout, stderr } = sinks;
        debug!(command = ?argv, "spawning process");

        let mut child = Self::command(argv)?
            .stdout(stdio_for(&stdout))
            .stderr(stdio_for(&stderr))
            .spawn()
            .map_err(ProcessFailure::Spawn)?;

        let child_out = child.stdout.take();
        let child_err = child.stderr.take();

        // Both pipes are drained concurrently so a chatty stderr cannot block stdout
        let forwarded = thread::scope(|scope| {
            let out_task = match (child_out, stdout) {
                (Some(pipe), Some(sink)) => Some(scope.spawn(move || forward(pipe, sink))),
                _ => None,
            };
            let err_task = match (child_err, stderr) {
                (Some(pipe), Some(sink)) => Some(scope.spawn(move || forward(pipe, sink))),
                _ => None,
            };
            join(out_task).and(join(err_task))
        });

        let status = child.wait().map_err(ProcessFailure::Spawn)?;
        debug!(?status, "process exited");
        if !status.success() {
            return Err(ProcessFailure::Status {
                code: status.code(),
            });
        }
        forwarded.map_err(ProcessFailure::Stream)
    }

    fn capture(&self, argv: &[String]) -> Result<Vec<u8>, ProcessFailure> {
        debug!(command = ?argv, "capturing process output");

        let output = Self::command(argv)?
            .stderr(Stdio::null())
            .output()
            .map_err(ProcessFailure::Spawn)?;

        if !output.status.success() {
            return Err(ProcessFailure::Status {
                code: output.status.code(),
            });
        }
        Ok(output.stdout)
    }
}
