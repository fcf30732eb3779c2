//! Child process plumbing
//!
//! The session talks to processes through [`Launcher`] and [`ChildHandle`] so that
//! tests can substitute scripted fakes. [`SystemLauncher`] spawns real processes with
//! piped stdio; one reader thread per output stream forwards raw bytes, tagged with
//! their stream, over a channel.
//! Those threads only move bytes: parsing and state changes stay on the caller's thread.

use std::fmt;
use std::io::{self, Read, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::command::LaunchSpec;

/// How a process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode {
    pub success: bool,
    /// None when terminated by a signal
    pub code: Option<i32>,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Output stream of a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Something observed on a running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// Bytes from one stream, in arrival order
    Output { stream: Stream, bytes: Vec<u8> },
    /// The process exited and all its output has been delivered
    Exited(ExitCode),
}

/// Handle on one running child
pub trait ChildHandle: fmt::Debug {
    /// Next event if one is ready, without blocking
    fn try_event(&mut self) -> io::Result<Option<ProcessEvent>>;

    /// Block until the next event
    fn wait_event(&mut self) -> io::Result<ProcessEvent>;

    /// Write text to the child's stdin
    fn send_input(&mut self, text: &str) -> io::Result<()>;

    /// Force-terminate the child
    fn kill(&mut self) -> io::Result<()>;
}

/// Starts child processes
pub trait Launcher: fmt::Debug {
    fn launch(&self, spec: &LaunchSpec) -> io::Result<Box<dyn ChildHandle>>;
}

/// Launcher backed by `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, spec: &LaunchSpec) -> io::Result<Box<dyn ChildHandle>> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.cwd)
            .env_clear()
            .envs(&spec.env)
            .stdin(if spec.interactive {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn()?;
        let (tx, rx) = mpsc::channel();
        let mut open_streams = 0;

        if let Some(stdout) = child.stdout.take() {
            pump(stdout, Stream::Stdout, tx.clone());
            open_streams += 1;
        }
        if let Some(stderr) = child.stderr.take() {
            pump(stderr, Stream::Stderr, tx);
            open_streams += 1;
        }

        log::debug!("spawned {} (pid {})", spec.program, child.id());

        Ok(Box::new(SystemChild {
            stdin: child.stdin.take(),
            child,
            events: rx,
            open_streams,
        }))
    }
}

enum Chunk {
    Data(Stream, Vec<u8>),
    Eof,
}

/// Forward everything read from `reader` until EOF
fn pump<R: Read + Send + 'static>(mut reader: R, stream: Stream, tx: Sender<Chunk>) {
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(Chunk::Data(stream, buf[..n].to_vec())).is_err() {
                        return;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        let _ = tx.send(Chunk::Eof);
    });
}

struct SystemChild {
    child: Child,
    stdin: Option<ChildStdin>,
    events: Receiver<Chunk>,
    open_streams: usize,
}

impl fmt::Debug for SystemChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemChild")
            .field("pid", &self.child.id())
            .field("open_streams", &self.open_streams)
            .finish()
    }
}

impl ChildHandle for SystemChild {
    fn try_event(&mut self) -> io::Result<Option<ProcessEvent>> {
        while self.open_streams > 0 {
            match self.events.try_recv() {
                Ok(Chunk::Data(stream, bytes)) => {
                    return Ok(Some(ProcessEvent::Output { stream, bytes }));
                }
                Ok(Chunk::Eof) => self.open_streams -= 1,
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => self.open_streams = 0,
            }
        }

        // Output fully drained; report exit once the process is reaped
        Ok(self
            .child
            .try_wait()?
            .map(|status| ProcessEvent::Exited(status.into())))
    }

    fn wait_event(&mut self) -> io::Result<ProcessEvent> {
        while self.open_streams > 0 {
            match self.events.recv() {
                Ok(Chunk::Data(stream, bytes)) => {
                    return Ok(ProcessEvent::Output { stream, bytes });
                }
                Ok(Chunk::Eof) => self.open_streams -= 1,
                Err(_) => self.open_streams = 0,
            }
        }
        let status = self.child.wait()?;
        Ok(ProcessEvent::Exited(status.into()))
    }

    fn send_input(&mut self, text: &str) -> io::Result<()> {
        let stdin = self.stdin.as_mut().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "process stdin is not connected")
        })?;
        stdin.write_all(text.as_bytes())?;
        stdin.flush()
    }

    fn kill(&mut self) -> io::Result<()> {
        match self.child.kill() {
            // Already exited
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(()),
            other => other,
        }
    }
}
