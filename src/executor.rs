//! Non-blocking command execution
//!
//! An [`Executor`] runs one dialog invocation at a time. The child process
//! (or, on Windows, the native dialog call) lives on a worker thread which
//! reads stdout to the end, reaps the child and sends the [`RawOutput`] back
//! over a channel. The caller either polls with [`Executor::ready`] or blocks
//! in [`Executor::result`].
//!
//! States: idle → running → finished. Starting a new command while one is
//! still running first waits for the old one.
//!
//! A process that cannot be spawned is not an error: it finishes
//! immediately with exit code -1 and empty output.

use std::ffi::OsString;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::command::Invocation;

/// First wait slice used by [`Executor::result`]
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Upper bound on the wait slice once backoff has grown it
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_millis(200);

/// Captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: String,
    /// Process exit code; -1 if it never ran or was killed by a signal
    pub exit_code: i32,
}

impl RawOutput {
    pub fn new(stdout: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code,
        }
    }

    /// Output of a command that could not run
    pub fn failed() -> Self {
        Self::new(String::new(), -1)
    }
}

enum State {
    Idle,
    Running(Receiver<RawOutput>),
    Finished(RawOutput),
}

/// Async handle for one dialog invocation
pub struct Executor {
    search_path: Option<OsString>,
    verbose: bool,
    poll_interval: Duration,
    max_backoff: Duration,
    state: State,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Idle => "idle",
            State::Running(_) => "running",
            State::Finished(_) => "finished",
        };
        f.debug_struct("Executor")
            .field("search_path", &self.search_path)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new() -> Self {
        Self::with_search_path(None)
    }

    /// Run children with `PATH` set to `search_path` when given
    pub fn with_search_path(search_path: Option<OsString>) -> Self {
        Self {
            search_path,
            verbose: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_backoff: DEFAULT_MAX_BACKOFF,
            state: State::Idle,
        }
    }

    /// Log command lines at info level instead of debug
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Wait slices used while blocking in [`Executor::result`]
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.poll_interval = initial.max(Duration::from_millis(1));
        self.max_backoff = max.max(self.poll_interval);
        self
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /// Launch `invocation`, waiting for any previous command first
    pub fn start(&mut self, invocation: &Invocation) {
        if self.is_running() {
            debug!("Previous command still running, waiting before restart");
            self.result();
        }

        match invocation {
            Invocation::Shell(line) => {
                if self.verbose {
                    info!(command = %line, "Running dialog command");
                } else {
                    debug!(command = %line, "Running dialog command");
                }
                let mut cmd = shell_command(line);
                if let Some(path) = &self.search_path {
                    cmd.env("PATH", path);
                }
                self.spawn(cmd);
            }
            #[cfg(target_os = "windows")]
            Invocation::Native(request) => {
                if self.verbose {
                    info!(request = ?request, "Running native dialog");
                }
                let request = request.clone();
                self.run_on_worker(move || request.run());
            }
            #[cfg(not(target_os = "windows"))]
            Invocation::Native(request) => {
                warn!(request = ?request, "Native dialogs are only available on Windows");
                self.skip();
            }
        }
    }

    /// Mark the handle finished without running anything
    pub fn skip(&mut self) {
        self.state = State::Finished(RawOutput::failed());
    }

    /// Wait at most `timeout` for the command to finish.
    ///
    /// An idle executor is trivially ready.
    pub fn ready(&mut self, timeout: Duration) -> bool {
        let received = match &self.state {
            State::Idle | State::Finished(_) => return true,
            State::Running(rx) => rx.recv_timeout(timeout),
        };

        match received {
            Ok(output) => {
                debug!(exit_code = output.exit_code, "Dialog command finished");
                self.state = State::Finished(output);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Dialog worker exited without reporting a result");
                self.state = State::Finished(RawOutput::failed());
                true
            }
        }
    }

    /// Block until finished and return the captured output.
    ///
    /// Repeated calls return the same output.
    pub fn result(&mut self) -> RawOutput {
        let mut wait = self.poll_interval;
        while !self.ready(wait) {
            pump_messages();
            wait = (wait * 2).min(self.max_backoff);
        }

        match &self.state {
            State::Finished(output) => output.clone(),
            State::Idle | State::Running(_) => RawOutput::failed(),
        }
    }

    fn spawn(&mut self, mut cmd: Command) {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        match cmd.spawn() {
            Ok(child) => self.run_on_worker(move || collect(child)),
            Err(e) => {
                warn!(error = %e, program = ?cmd.get_program(), "Failed to spawn dialog command");
                self.state = State::Finished(RawOutput::failed());
            }
        }
    }

    fn run_on_worker<F>(&mut self, job: F)
    where
        F: FnOnce() -> RawOutput + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("pdialog-exec".to_string())
            .spawn(move || {
                // Receiver gone means the dialog was dropped; the child is reaped anyway
                let _ = tx.send(job());
            });

        self.state = match spawned {
            Ok(_) => State::Running(rx),
            Err(e) => {
                warn!(error = %e, "Failed to start dialog worker thread");
                State::Finished(RawOutput::failed())
            }
        };
    }
}

/// Drain stdout, then reap the child
fn collect(mut child: Child) -> RawOutput {
    let mut buf = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        if let Err(e) = stdout.read_to_end(&mut buf) {
            warn!(error = %e, "Failed to read dialog output");
        }
    }

    let exit_code = match child.wait() {
        Ok(status) => status.code().unwrap_or(-1),
        Err(e) => {
            warn!(error = %e, "Failed to wait for dialog process");
            -1
        }
    };

    RawOutput::new(String::from_utf8_lossy(&buf).into_owned(), exit_code)
}

#[cfg(not(target_os = "windows"))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(line);
    cmd
}

/// First word is the program, the rest is passed through untouched
#[cfg(target_os = "windows")]
fn shell_command(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    let (program, args) = line.split_once(' ').unwrap_or((line, ""));
    let mut cmd = Command::new(program);
    cmd.raw_arg(args).creation_flags(CREATE_NO_WINDOW);
    cmd
}

#[cfg(target_os = "windows")]
use crate::native::pump_messages;

#[cfg(not(target_os = "windows"))]
fn pump_messages() {}
