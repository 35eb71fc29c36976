//! Synchronous execution of external programs.
//!
//! Every invocation is logged at the debug level. Standard error is always captured: it's drained
//! on a separate thread for streaming processes so that a chatty program can't block on a full
//! pipe while we're reading its standard output.

use crate::Error;
use itertools::Itertools;
use std::io::{ErrorKind, Read};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread::JoinHandle;

/// Human-readable rendering of a command line.
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|x| x.to_string_lossy())
        .join(" ")
}

fn spawn_error(command: &Command, source: std::io::Error) -> Error {
    if source.kind() == ErrorKind::NotFound {
        Error::NotFound {
            program: command.get_program().to_string_lossy().into_owned(),
        }
    } else {
        Error::Io {
            command: describe(command),
            source,
        }
    }
}

/// Run the command to completion and return its standard output.
pub fn output(mut command: Command) -> Result<Vec<u8>, Error> {
    let description = describe(&command);
    log::debug!("Running {description}");

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(&command, e))?;

    if !output.status.success() {
        return Err(Error::Failed {
            command: description,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    Ok(output.stdout)
}

/// Run the command to completion, discarding its standard output.
pub fn run(command: Command) -> Result<(), Error> {
    output(command).map(|_| ())
}

/// A spawned process with a captured standard error.
#[derive(Debug)]
pub struct Running {
    command: String,
    child: Child,
    stderr: Option<JoinHandle<String>>,
}

impl Running {
    pub fn spawn(mut command: Command, stdin: Stdio, stdout: Stdio) -> Result<Self, Error> {
        let description = describe(&command);
        log::debug!("Spawning {description}");

        let mut child = command
            .stdin(stdin)
            .stdout(stdout)
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(&command, e))?;

        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buffer = Vec::new();
                if let Err(e) = pipe.read_to_end(&mut buffer) {
                    log::warn!("Failed to read process stderr: {e}");
                }
                String::from_utf8_lossy(&buffer).trim().to_owned()
            })
        });

        Ok(Self {
            command: description,
            child,
            stderr,
        })
    }

    /// Take the standard output pipe. Returns `None` if stdout wasn't piped or was already taken.
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    /// Wait for the process to exit and check its status.
    pub fn wait(mut self) -> Result<(), Error> {
        let status = self.child.wait().map_err(|source| Error::Io {
            command: self.command.clone(),
            source,
        })?;
        let stderr = self
            .stderr
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        if status.success() {
            if !stderr.is_empty() {
                log::debug!("{} stderr: {stderr}", self.command);
            }
            Ok(())
        } else {
            Err(Error::Failed {
                command: self.command,
                status,
                stderr,
            })
        }
    }

    /// Terminate the process, e.g. after its output turned out to be unusable.
    pub fn kill(mut self) {
        if let Err(e) = self.child.kill() {
            log::warn!("Failed to kill '{}': {e}", self.command);
        }
        // Reap the child
        let _ = self.child.wait();
    }
}

/// Run `first | second` to completion. Both processes must succeed.
pub fn pipe(first: Command, second: Command) -> Result<(), Error> {
    let mut upstream = Running::spawn(first, Stdio::null(), Stdio::piped())?;
    let stdout = upstream.take_stdout().ok_or_else(|| Error::Io {
        command: upstream.command.clone(),
        source: std::io::Error::other("stdout isn't piped"),
    })?;

    let downstream = match Running::spawn(second, Stdio::from(stdout), Stdio::null()) {
        Ok(x) => x,
        Err(e) => {
            upstream.kill();
            return Err(e);
        }
    };

    let downstream = downstream.wait();
    upstream.wait()?;
    downstream
}
