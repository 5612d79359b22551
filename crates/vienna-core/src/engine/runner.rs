//! Process execution behind a trait, so workflows can be exercised without the
//! engine installed.

use super::config::Tool;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

/// What the engine reads on stdin.
#[derive(Debug, Clone, PartialEq)]
pub enum StdinSource {
    Text(String),
    File(PathBuf),
}

/// A fully resolved engine call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub tool: Tool,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub stdin: Option<StdinSource>,
    /// Working directory of the child; the engine writes its auxiliary files here.
    pub working_dir: Option<PathBuf>,
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub success: bool,
}

impl CommandOutput {
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
            success: true,
        }
    }

    #[must_use]
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
            success: false,
        }
    }
}

/// Runs an [`Invocation`] to completion.
///
/// Implementations block until the process exits. An `Err` means the process
/// could not be started or waited on; a non-zero exit is reported through
/// [`CommandOutput::success`].
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs the engine as a child process with an argument vector (no shell).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }
        let text_input = match &invocation.stdin {
            Some(StdinSource::Text(text)) => {
                command.stdin(Stdio::piped());
                Some(text.clone())
            }
            Some(StdinSource::File(path)) => {
                command.stdin(Stdio::from(File::open(path)?));
                None
            }
            None => {
                command.stdin(Stdio::null());
                None
            }
        };

        let mut child = command.spawn()?;

        // Feed stdin from a separate thread so a chatty engine cannot deadlock
        // against a full stdout pipe.
        let writer = match (text_input, child.stdin.take()) {
            (Some(text), Some(mut stdin)) => {
                Some(thread::spawn(move || stdin.write_all(text.as_bytes())))
            }
            _ => None,
        };

        let output = child.wait_with_output()?;
        if let Some(handle) = writer {
            match handle.join() {
                Ok(Err(e)) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e),
                Err(_) => return Err(io::Error::other("stdin writer thread panicked")),
                _ => {}
            }
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        })
    }
}
