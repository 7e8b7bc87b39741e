use std::collections::TryReserveError;
use std::ffi::NulError;
use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Fatal errors of the read-split-dispatch loop.
///
/// Any of these ends the session: the entry point reports it and exits with a
/// failure status.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by builtins. They are reported and the loop goes on.
#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    #[error("{}: {source}", path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors of the parent side of a launch. Failures to replace the program
/// image are reported by the child itself and never show up here.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("argument contains a NUL byte")]
    NulByte(#[from] NulError),

    #[error("fork failed: {0}")]
    Fork(#[source] Errno),

    #[error("waiting for pid {pid} failed: {source}")]
    Wait {
        pid: i32,
        #[source]
        source: Errno,
    },
}
