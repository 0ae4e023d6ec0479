use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that end the whole run.
///
/// Everything else is logged against the input that caused it and the
/// batch moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to inspect a file for video tracks.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to run {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Status {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("unreadable media report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Failure of a single transcode.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("failed to run {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lost contact with {program}: {message}")]
    Io { program: String, message: String },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
}
