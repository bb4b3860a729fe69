//! A scripted stand-in for the system command runner.

use drushctl_runtime::{CommandOutput, DrushInvocation, DrushRunner, Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Either canned output or a canned failure for one invocation.
enum Response {
    Output(String),
    Failure { status: i32, stderr: String },
}

/// Replays queued responses in order and records every invocation.
///
/// An empty queue answers with empty output, so tests only script the
/// invocations they care about. Recorded argv vectors let tests assert
/// that *no* external command ran (or that commands ran in order).
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Response>>,
    invocations: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue successful output for the next unanswered invocation.
    pub fn push_output(&self, stdout: &str) {
        self.responses
            .borrow_mut()
            .push_back(Response::Output(stdout.to_string()));
    }

    /// Queue a non-zero exit for the next unanswered invocation.
    pub fn push_failure(&self, status: i32, stderr: &str) {
        self.responses.borrow_mut().push_back(Response::Failure {
            status,
            stderr: stderr.to_string(),
        });
    }

    /// Every argv recorded so far, in execution order. The program slot
    /// is included first (`drush` unless the invocation overrode it).
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.invocations.borrow().len()
    }
}

impl DrushRunner for ScriptedRunner {
    fn run(&self, invocation: &DrushInvocation) -> Result<CommandOutput> {
        let mut argv = vec![invocation.program().unwrap_or("drush").to_string()];
        argv.extend(invocation.args().iter().cloned());
        self.invocations.borrow_mut().push(argv);

        match self.responses.borrow_mut().pop_front() {
            Some(Response::Output(stdout)) => Ok(CommandOutput {
                stdout,
                stderr: String::new(),
            }),
            Some(Response::Failure { status, stderr }) => Err(Error::CommandFailed {
                command: invocation.display(),
                status: Some(status),
                stderr,
            }),
            None => Ok(CommandOutput::default()),
        }
    }
}
