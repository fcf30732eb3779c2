//! Common test utilities for integration and scenario tests.
//!
//! [`FakeSvn`] stands in for the svn binary: each launch replays the next queued
//! reply, and every launch is recorded.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::rc::Rc;

use tis::config::Config;
use tis::svn::{ChildHandle, ExitCode, LaunchSpec, Launcher, ProcessEvent, Session, Stream};

/// Events one fake process will produce
#[derive(Debug, Default)]
struct ChildScript {
    events: VecDeque<ProcessEvent>,
    killed: bool,
}

#[derive(Debug, Default)]
struct FakeState {
    queued: VecDeque<Rc<RefCell<ChildScript>>>,
    current: Option<Rc<RefCell<ChildScript>>>,
    launched: Vec<LaunchSpec>,
    input: Vec<String>,
}

/// Scripted replacement for the svn binary
#[derive(Debug, Default, Clone)]
pub struct FakeSvn {
    state: Rc<RefCell<FakeState>>,
}

impl FakeSvn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `root` whose processes come from this fake
    pub fn session(&self, root: &Path) -> Session {
        Session::with_launcher(
            Config::default().session_config(root),
            Box::new(self.clone()),
        )
    }

    /// Next launch prints `output` and exits with status 0
    pub fn reply(&self, output: &str) {
        self.queue(output, Some(ExitCode {
            success: true,
            code: Some(0),
        }));
    }

    /// Next launch prints `output` and exits with `code`
    pub fn fail(&self, output: &str, code: i32) {
        self.queue(output, Some(ExitCode {
            success: false,
            code: Some(code),
        }));
    }

    /// Next launch prints `output` and keeps running
    pub fn reply_open(&self, output: &str) {
        self.queue(output, None);
    }

    /// Let the most recent process print `output` and exit with status 0
    pub fn finish_current(&self, output: &str) {
        let state = self.state.borrow();
        let Some(current) = state.current.as_ref() else {
            panic!("no process launched");
        };
        let mut script = current.borrow_mut();
        if !output.is_empty() {
            script.events.push_back(stdout(output));
        }
        script.events.push_back(ProcessEvent::Exited(ExitCode {
            success: true,
            code: Some(0),
        }));
    }

    /// Argument vectors of every launch so far
    pub fn launched(&self) -> Vec<Vec<String>> {
        self.state
            .borrow()
            .launched
            .iter()
            .map(|spec| spec.args.clone())
            .collect()
    }

    /// Arguments of the most recent launch
    pub fn last_args(&self) -> Vec<String> {
        self.launched().pop().unwrap_or_default()
    }

    pub fn launch_count(&self) -> usize {
        self.state.borrow().launched.len()
    }

    /// Text written to the processes' stdin
    pub fn input(&self) -> Vec<String> {
        self.state.borrow().input.clone()
    }

    fn queue(&self, output: &str, exit: Option<ExitCode>) {
        let mut script = ChildScript::default();
        if !output.is_empty() {
            script.events.push_back(stdout(output));
        }
        if let Some(code) = exit {
            script.events.push_back(ProcessEvent::Exited(code));
        }
        self.state
            .borrow_mut()
            .queued
            .push_back(Rc::new(RefCell::new(script)));
    }
}

impl Launcher for FakeSvn {
    fn launch(&self, spec: &LaunchSpec) -> io::Result<Box<dyn ChildHandle>> {
        let mut state = self.state.borrow_mut();
        state.launched.push(spec.clone());
        let script = state.queued.pop_front().unwrap_or_default();
        state.current = Some(script.clone());
        Ok(Box::new(FakeChild {
            script,
            state: self.state.clone(),
        }))
    }
}

#[derive(Debug)]
struct FakeChild {
    script: Rc<RefCell<ChildScript>>,
    state: Rc<RefCell<FakeState>>,
}

impl ChildHandle for FakeChild {
    fn try_event(&mut self) -> io::Result<Option<ProcessEvent>> {
        let mut script = self.script.borrow_mut();
        if let Some(event) = script.events.pop_front() {
            return Ok(Some(event));
        }
        if script.killed {
            return Ok(Some(ProcessEvent::Exited(ExitCode {
                success: false,
                code: None,
            })));
        }
        Ok(None)
    }

    fn wait_event(&mut self) -> io::Result<ProcessEvent> {
        self.try_event()?
            .ok_or_else(|| io::Error::other("fake svn has nothing more to say"))
    }

    fn send_input(&mut self, text: &str) -> io::Result<()> {
        self.state.borrow_mut().input.push(text.to_string());
        Ok(())
    }

    fn kill(&mut self) -> io::Result<()> {
        self.script.borrow_mut().killed = true;
        Ok(())
    }
}

fn stdout(output: &str) -> ProcessEvent {
    ProcessEvent::Output {
        stream: Stream::Stdout,
        bytes: output.as_bytes().to_vec(),
    }
}
