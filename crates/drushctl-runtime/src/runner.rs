//! Synchronous execution of external commands.
//!
//! One child process at a time, stdout and stderr drained on background
//! threads while the parent polls `try_wait` against the configured
//! timeout. On expiry the child is killed and the invocation reported as
//! an error rather than blocking forever.

use crate::config::Config;
use crate::invocation::DrushInvocation;
use crate::{Error, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL_MS: u64 = 50;

/// Captured output of a finished external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// The seam between command construction and process execution.
///
/// Production code uses [`SystemRunner`]; tests substitute a scripted
/// implementation that records invocations instead of spawning anything.
pub trait DrushRunner {
    fn run(&self, invocation: &DrushInvocation) -> Result<CommandOutput>;
}

/// Runs invocations as real child processes.
pub struct SystemRunner {
    drush_bin: String,
    site_args: Vec<String>,
    timeout: Duration,
    timeout_secs: u64,
    max_output_bytes: u64,
}

impl SystemRunner {
    pub fn new(config: &Config) -> Self {
        let mut site_args = Vec::new();
        if let Some(uri) = &config.site.uri {
            site_args.push(format!("--uri={}", uri));
        }
        if let Some(root) = &config.site.root {
            site_args.push(format!("--root={}", root));
        }

        Self {
            drush_bin: config.drush_bin.clone(),
            site_args,
            timeout: Duration::from_secs(config.timeout_secs),
            timeout_secs: config.timeout_secs,
            max_output_bytes: config.max_output_bytes,
        }
    }
}

impl DrushRunner for SystemRunner {
    fn run(&self, invocation: &DrushInvocation) -> Result<CommandOutput> {
        let program = invocation.program().unwrap_or(&self.drush_bin);

        let mut command = Command::new(program);
        command.args(invocation.args());
        // Site options apply to Drush itself, not to helper tools like php
        if invocation.program().is_none() {
            command.args(&self.site_args);
        }
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

        let limit = self.max_output_bytes;
        let stdout_pipe = child.stdout.take().expect("stdout was piped");
        let stderr_pipe = child.stderr.take().expect("stderr was piped");
        let stdout_thread = std::thread::spawn(move || drain(stdout_pipe, limit));
        let stderr_thread = std::thread::spawn(move || drain(stderr_pipe, limit));

        // Polling wait with a deadline; a hung Drush gets killed, not waited on
        let start = Instant::now();
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None => {
                    if start.elapsed() > self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(Error::Timeout {
                            command: invocation.display(),
                            timeout_secs: self.timeout_secs,
                        });
                    }
                    std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
                }
            }
        };

        let (stdout, stdout_overflow) = stdout_thread
            .join()
            .expect("stdout drain thread panicked")?;
        let (stderr, _) = stderr_thread
            .join()
            .expect("stderr drain thread panicked")?;

        if stdout_overflow {
            return Err(Error::OutputTooLarge {
                command: invocation.display(),
                limit_bytes: limit,
            });
        }

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        };

        if !status.success() {
            return Err(Error::CommandFailed {
                command: invocation.display(),
                status: status.code(),
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}

/// Read a pipe to EOF, keeping at most `limit` bytes.
///
/// Reading continues past the limit so the child never blocks on a full
/// pipe; the overflow flag tells the caller the capture is incomplete.
fn drain(mut pipe: impl Read, limit: u64) -> std::io::Result<(Vec<u8>, bool)> {
    let mut captured = Vec::new();
    let mut overflow = false;
    let mut chunk = [0u8; 8192];

    loop {
        let n = pipe.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        if (captured.len() as u64) < limit {
            let room = (limit - captured.len() as u64) as usize;
            captured.extend_from_slice(&chunk[..n.min(room)]);
            if n > room {
                overflow = true;
            }
        } else {
            overflow = true;
        }
    }

    Ok((captured, overflow))
}

/// Collapse a secondary, informational invocation to best-effort form.
///
/// Primary commands propagate errors; extras like post-clear cache stats
/// or version lookups degrade to `None` and the caller shows a fallback.
pub fn best_effort(result: Result<CommandOutput>) -> Option<String> {
    result.ok().map(|output| output.trimmed_stdout().to_string())
}
