// src/errors.rs

//! Crate-wide error type.
//!
//! Every failure the launcher can hit maps to one variant carrying a
//! single-line, user-actionable message. `main` prints the message and uses
//! [`LauncherError::exit_code`] to pick the process exit status.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    /// The bundled script is missing from the installed tree.
    #[error(
        "could not locate {script} inside the installed package (searched under {searched:?}); \
         reinstall with: cargo install --force nvnodetop"
    )]
    PackagingIntegrity { script: String, searched: PathBuf },

    /// The host OS cannot run the wrapped interpreter.
    #[error(
        "nvnodetop is a Bash script and is not supported on {os}; \
         please use WSL2 or a Linux/macOS environment"
    )]
    UnsupportedPlatform { os: String },

    /// A runnable copy of the script could not be produced.
    #[error("could not write a runnable copy of the script to the temp directory: {source}")]
    Normalize {
        #[source]
        source: std::io::Error,
    },

    /// Process replacement itself failed; control should never have
    /// returned to the launcher.
    #[error("failed to exec {interpreter:?}: {source}")]
    Handoff {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// Exit code for launcher-internal failures.
    ///
    /// 127 for a failed exec follows the shell convention for a missing
    /// command; everything else exits 2, which keeps launcher failures
    /// apart from the wrapped script's common exit code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::Handoff { .. } => 127,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
