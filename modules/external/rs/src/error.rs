use std::process::ExitStatus;
use thiserror::Error;

/// Failures of an external program invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("executable '{program}' not found, add it to PATH or set its tool directory")]
    NotFound { program: String },

    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
