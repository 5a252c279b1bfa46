// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running setup and test commands.
//!
//! Commands go through `bash -c`. Stdin is fed and closed from a helper
//! thread while stdout and stderr are drained on their own threads, so a
//! chatty child can never wedge on a full pipe while we wait on it.
//!
//! On Unix each command leads its own process group. A timeout kills the
//! whole group, so background jobs started by the shell release the pipes
//! along with it.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::config::TestCase;
use crate::error::{Error, Result};

const SHELL: &str = "bash";
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long pipe threads get to wind down after a timeout kill.
const REAP_GRACE: Duration = Duration::from_secs(2);

/// Result of a test command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestOutcome {
    pub success: bool,
    pub stdout: String,
}

#[derive(Debug)]
struct Captured {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// Convert a config timeout (minutes, 0 = none) into a limit.
pub(crate) fn limit_from_minutes(minutes: u16) -> Option<Duration> {
    (minutes > 0).then(|| Duration::from_secs(u64::from(minutes) * 60))
}

/// Run a setup command and return its stdout.
///
/// A non-zero exit becomes [`Error::CommandFailed`] carrying stderr.
pub fn set_up(command: &str, dir: Option<&Path>, limit: Option<Duration>) -> Result<String> {
    let captured = execute(command, b"", dir, limit)?;
    if captured.status.success() {
        Ok(String::from_utf8(captured.stdout)?)
    } else {
        Err(Error::CommandFailed {
            stderr: String::from_utf8(captured.stderr)?,
        })
    }
}

/// Run a test case's command with its input and compare stdout.
pub fn run_test(test: &TestCase, dir: Option<&Path>) -> Result<TestOutcome> {
    let captured = execute(
        &test.run,
        test.input.as_bytes(),
        dir,
        limit_from_minutes(test.timeout),
    )?;
    if !captured.status.success() {
        return Err(Error::CommandFailed {
            stderr: String::from_utf8(captured.stderr)?,
        });
    }

    let stdout = String::from_utf8(captured.stdout)?;
    let success = test.comparison.matches(&stdout, &test.output)?;
    debug!(test = %test.name, success, "compared output");
    Ok(TestOutcome { success, stdout })
}

fn execute(command: &str, input: &[u8], dir: Option<&Path>, limit: Option<Duration>) -> Result<Captured> {
    let mut cmd = Command::new(SHELL);
    cmd.args(["-c", command])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd.spawn().map_err(|e| {
        Error::Message(format!(
            "Failed to start {} with the command `{}`: {}",
            SHELL, command, e
        ))
    })?;
    debug!(command, pid = child.id(), "spawned");

    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Message("Could not get a handle to stdin".to_string()))?;
    let data = input.to_vec();
    let feeder = thread::spawn(move || {
        let mut stdin = stdin;
        // A child that never reads its input closes the pipe early; that is
        // not a grading error.
        if let Err(e) = stdin.write_all(&data) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                warn!(error = %e, "writing test input failed");
            }
        }
        // stdin drops here and the child sees end-of-stream
    });

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait(&mut child, limit) {
        Ok(status) => status,
        Err(e) => {
            let deadline = Instant::now() + REAP_GRACE;
            while !(feeder.is_finished() && stdout.is_finished() && stderr.is_finished()) {
                if Instant::now() >= deadline {
                    warn!(command, "pipes still open after kill; detaching reader threads");
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
            return Err(e);
        }
    };
    let _ = feeder.join();

    Ok(Captured {
        status,
        stdout: join(stdout)?,
        stderr: join(stderr)?,
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    handle
        .join()
        .map_err(|_| Error::Message("output reader thread panicked".to_string()))?
        .map_err(Error::from)
}

fn wait(child: &mut Child, limit: Option<Duration>) -> Result<ExitStatus> {
    let Some(limit) = limit else {
        return Ok(child.wait()?);
    };

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            warn!(pid = child.id(), ?limit, "command timed out; killing");
            kill_group(child);
            return Err(Error::Timeout(limit));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Kill `child` and everything in its process group, then reap it.
fn kill_group(child: &mut Child) {
    #[cfg(unix)]
    {
        let group = format!("-{}", child.id());
        if let Err(e) = Command::new("kill")
            .args(["-KILL", "--", &group])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            warn!(error = %e, "could not signal process group");
        }
    }
    // The child may have exited between try_wait and kill
    let _ = child.kill();
    let _ = child.wait();
}
