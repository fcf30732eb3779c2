//! svn process session
//!
//! A [`Session`] owns the single process slot and its capture buffer. Only one svn
//! process may run at a time; a second `run` while one is active fails with
//! [`SvnError::Busy`] instead of queueing, because the capture buffer and the
//! completion tag are single-slot.

use std::io;
use std::path::{Path, PathBuf};

use super::SvnError;
use super::command::{Arg, CommandKind, EnvOverride, LaunchSpec, apply_env_overrides, flatten_args};
use super::constants::{self, flags, markers};
use super::interactive::{Prompt, detect_prompt};
use super::process::{ChildHandle, ExitCode, Launcher, ProcessEvent, Stream, SystemLauncher};

/// How many trailing capture lines are searched for an svn error line
const ERROR_SCAN_LINES: usize = 50;

/// Static process settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Program to run (normally `svn`)
    pub program: String,
    /// Working-copy root; every command runs here
    pub working_dir: PathBuf,
    /// Overlay applied to the ambient environment
    pub environment: Vec<EnvOverride>,
}

impl SessionConfig {
    /// Default settings for a working copy
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: constants::SVN_COMMAND.to_string(),
            working_dir: working_dir.into(),
            environment: constants::DEFAULT_ENVIRONMENT
                .iter()
                .map(|s| EnvOverride::parse(s))
                .collect(),
        }
    }
}

/// Blocking behaviour of [`Session::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Return immediately; completion is delivered by [`Session::poll`]
    #[default]
    Async,
    /// Block until the process exits
    Sync,
}

/// Options for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: RunMode,
    /// Start with an empty capture buffer (otherwise output is appended)
    pub clear_capture: bool,
}

impl RunOptions {
    /// Asynchronous run with a fresh capture buffer
    pub fn background() -> Self {
        Self {
            mode: RunMode::Async,
            clear_capture: true,
        }
    }

    /// Synchronous run with a fresh capture buffer
    pub fn blocking() -> Self {
        Self {
            mode: RunMode::Sync,
            clear_capture: true,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// Exit status zero
    Finished,
    /// Terminated through [`Session::kill`]
    Killed,
    /// Non-zero or abnormal exit
    Failed(ExitCode),
}

/// Result of one run, tagged with the command kind given at launch
#[derive(Debug)]
pub struct Completion {
    pub kind: CommandKind,
    pub exit: ExitClass,
    /// Set unless `exit` is [`ExitClass::Finished`]
    pub error: Option<SvnError>,
}

impl Completion {
    /// Should the output be handed to a parser?
    pub fn is_success(&self) -> bool {
        self.exit == ExitClass::Finished
    }
}

#[derive(Debug)]
struct Running {
    kind: CommandKind,
    child: Box<dyn ChildHandle>,
    killed: bool,
    prompt: Option<Prompt>,
}

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Idle,
    Running(Running),
}

/// Line assembly for one output stream
#[derive(Debug, Default)]
struct LineBuffer {
    /// Bytes after the last newline
    pending: Vec<u8>,
    /// A prompt was just taken from the tail; blanks still trailing it are dropped
    after_prompt: bool,
}

impl LineBuffer {
    /// Move complete lines into `text`; returns a prompt if the stream ends in one
    fn feed(&mut self, mut bytes: &[u8], text: &mut String) -> Option<Prompt> {
        if self.after_prompt {
            let blanks = bytes.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
            bytes = &bytes[blanks..];
            if !bytes.is_empty() {
                self.after_prompt = false;
            }
        }
        self.pending.extend_from_slice(bytes);
        let mut prompt = None;

        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            if let Some(p) = detect_prompt(&line) {
                prompt = Some(p);
            } else {
                text.push_str(&line);
            }
        }

        // Prompts are printed without a trailing newline
        if !self.pending.is_empty()
            && let Some(p) = detect_prompt(&String::from_utf8_lossy(&self.pending))
        {
            self.pending.clear();
            self.after_prompt = true;
            prompt = Some(p);
        }

        prompt
    }

    fn flush(&mut self, text: &mut String) {
        if self.pending.is_empty() {
            return;
        }
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        let tail = std::mem::take(&mut self.pending);
        text.push_str(&String::from_utf8_lossy(&tail));
    }
}

/// Append-only output sink for the current invocation
///
/// Each stream is assembled into lines separately, so only whole lines reach
/// `text` and a partial stdout line never absorbs stderr output.
#[derive(Debug, Default)]
struct Capture {
    text: String,
    stdout: LineBuffer,
    stderr: LineBuffer,
    finished: bool,
}

impl Capture {
    /// Append raw output from `stream`; returns a prompt if the output ends in one
    ///
    /// Recognized prompts are withheld from the captured text.
    fn feed(&mut self, stream: Stream, bytes: &[u8]) -> Option<Prompt> {
        let buffer = match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        };
        buffer.feed(bytes, &mut self.text)
    }

    fn finish(&mut self) {
        self.stdout.flush(&mut self.text);
        self.stderr.flush(&mut self.text);
        self.finished = true;
    }
}

/// Single-slot svn process session
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    launcher: Box<dyn Launcher>,
    slot: Slot,
    capture: Capture,
}

impl Session {
    /// Session that spawns real processes
    pub fn new(config: SessionConfig) -> Self {
        Self::with_launcher(config, Box::new(SystemLauncher))
    }

    /// Session with an injected launcher
    pub fn with_launcher(config: SessionConfig, launcher: Box<dyn Launcher>) -> Self {
        Self {
            config,
            launcher,
            slot: Slot::Idle,
            capture: Capture::default(),
        }
    }

    /// Working-copy root
    pub fn working_dir(&self) -> &Path {
        &self.config.working_dir
    }

    /// Is a process occupying the slot?
    pub fn is_busy(&self) -> bool {
        matches!(self.slot, Slot::Running(_))
    }

    /// Kind of the running command, if any
    pub fn running_kind(&self) -> Option<CommandKind> {
        match &self.slot {
            Slot::Running(r) => Some(r.kind),
            Slot::Idle => None,
        }
    }

    /// Captured output so far
    pub fn capture(&self) -> &str {
        &self.capture.text
    }

    /// Has the last invocation finished writing to the capture buffer?
    pub fn is_capture_finished(&self) -> bool {
        self.capture.finished
    }

    /// Prompt waiting for [`Session::answer`]
    pub fn pending_prompt(&self) -> Option<&Prompt> {
        match &self.slot {
            Slot::Running(r) => r.prompt.as_ref(),
            Slot::Idle => None,
        }
    }

    /// Launch `svn <kind> <args>`
    ///
    /// Async runs return `Ok(None)` immediately. Sync runs block and return the
    /// completion; the capture buffer then holds the full output.
    pub fn run(
        &mut self,
        kind: CommandKind,
        args: &[Arg],
        options: RunOptions,
    ) -> Result<Option<Completion>, SvnError> {
        if let Slot::Running(running) = &self.slot {
            log::info!("rejected `{}`: `{}` is still running", kind, running.kind);
            return Err(SvnError::Busy {
                running: running.kind,
            });
        }

        if options.clear_capture {
            self.capture = Capture::default();
        } else {
            self.capture.finished = false;
        }

        let spec = self.launch_spec(kind, args, options.mode);
        log::debug!("launching {} {:?}", spec.program, spec.args);

        let child = self.launcher.launch(&spec).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SvnError::SvnNotFound
            } else {
                SvnError::IoError(e)
            }
        })?;

        self.slot = Slot::Running(Running {
            kind,
            child,
            killed: false,
            prompt: None,
        });

        match options.mode {
            RunMode::Async => Ok(None),
            RunMode::Sync => Ok(Some(self.wait_for_exit(kind))),
        }
    }

    /// Drain ready process events
    ///
    /// Returns a prompt when one was just detected. When the process has exited,
    /// `on_complete` runs with the completion and the full capture before the slot
    /// is released, so a command started afterwards never sees a half-finished
    /// pipeline.
    pub fn poll<F>(&mut self, on_complete: F) -> Option<Prompt>
    where
        F: FnOnce(&Completion, &str),
    {
        let (kind, killed, exit) = {
            let Slot::Running(running) = &mut self.slot else {
                return None;
            };

            let exit = loop {
                match running.child.try_event() {
                    Ok(None) => return None,
                    Ok(Some(ProcessEvent::Output { stream, bytes })) => {
                        if let Some(prompt) = self.capture.feed(stream, &bytes) {
                            log::info!("svn {} is asking: {}", running.kind, prompt.text);
                            running.prompt = Some(prompt.clone());
                            return Some(prompt);
                        }
                    }
                    Ok(Some(ProcessEvent::Exited(code))) => break Ok(code),
                    Err(e) => break Err(e),
                }
            };
            (running.kind, running.killed, exit)
        };

        let completion = self.complete(kind, killed, exit);
        let slot = scopeguard::guard(&mut self.slot, |slot| *slot = Slot::Idle);
        on_complete(&completion, &self.capture.text);
        drop(slot);
        None
    }

    /// Answer the pending prompt; a newline is appended
    pub fn answer(&mut self, response: &str) -> Result<(), SvnError> {
        let Slot::Running(running) = &mut self.slot else {
            return Err(SvnError::NotRunning);
        };
        let Some(prompt) = running.prompt.take() else {
            return Err(SvnError::NoPendingPrompt);
        };

        if prompt.is_secret() {
            log::debug!("answering `{}` (masked)", prompt.text);
        } else {
            log::debug!("answering `{}` with `{}`", prompt.text, response);
        }
        running.child.send_input(&format!("{response}\n"))?;
        Ok(())
    }

    /// Force-terminate the running process
    ///
    /// The completion is still delivered by [`Session::poll`], classified as
    /// [`ExitClass::Killed`].
    pub fn kill(&mut self) -> Result<(), SvnError> {
        let Slot::Running(running) = &mut self.slot else {
            return Err(SvnError::NotRunning);
        };
        log::info!("killing svn {}", running.kind);
        running.killed = true;
        running.prompt = None;
        running.child.kill()?;
        Ok(())
    }

    fn launch_spec(&self, kind: CommandKind, args: &[Arg], mode: RunMode) -> LaunchSpec {
        let mut argv: Vec<String> = kind.leading_args().iter().map(|s| s.to_string()).collect();
        if mode == RunMode::Sync {
            argv.push(flags::NON_INTERACTIVE.to_string());
        }
        argv.extend(flatten_args(args));

        let ambient = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));

        LaunchSpec {
            program: self.config.program.clone(),
            args: argv,
            cwd: self.config.working_dir.clone(),
            env: apply_env_overrides(ambient, &self.config.environment),
            interactive: mode == RunMode::Async,
        }
    }

    /// Block on the running process until it exits, then release the slot
    fn wait_for_exit(&mut self, kind: CommandKind) -> Completion {
        let exit = loop {
            let Slot::Running(running) = &mut self.slot else {
                break Err(io::Error::other("process slot emptied while waiting"));
            };
            match running.child.wait_event() {
                Ok(ProcessEvent::Output { stream, bytes }) => {
                    if let Some(prompt) = self.capture.feed(stream, &bytes) {
                        // Sync runs pass --non-interactive, so svn gives up on its own
                        log::warn!("unanswerable prompt in synchronous run: {}", prompt.text);
                    }
                }
                Ok(ProcessEvent::Exited(code)) => break Ok(code),
                Err(e) => break Err(e),
            }
        };

        // Nothing can call kill() while the caller is blocked here
        let completion = self.complete(kind, false, exit);
        self.slot = Slot::Idle;
        completion
    }

    /// Classify the exit of the running process
    fn complete(
        &mut self,
        kind: CommandKind,
        killed: bool,
        exit: io::Result<ExitCode>,
    ) -> Completion {
        self.capture.finish();

        let (exit, error) = match exit {
            Err(e) => (
                ExitClass::Failed(ExitCode {
                    success: false,
                    code: None,
                }),
                Some(SvnError::IoError(e)),
            ),
            Ok(_) if killed => (ExitClass::Killed, Some(SvnError::Killed)),
            Ok(code) if code.success => (ExitClass::Finished, None),
            Ok(code) => {
                let error = match find_tool_error(&self.capture.text) {
                    Some(message) => SvnError::ToolReported { message },
                    None => SvnError::CommandFailed {
                        exit_code: code.code,
                    },
                };
                (ExitClass::Failed(code), Some(error))
            }
        };

        log::debug!("svn {} ended: {:?}", kind, exit);
        Completion { kind, exit, error }
    }
}

/// Last `svn: ...` error line near the end of the capture (warnings excluded)
pub(crate) fn find_tool_error(capture: &str) -> Option<String> {
    capture
        .lines()
        .rev()
        .take(ERROR_SCAN_LINES)
        .find(|line| {
            line.starts_with(markers::ERROR_PREFIX) && !line.starts_with(markers::WARNING_PREFIX)
        })
        .map(|line| line.trim_end().to_string())
}
