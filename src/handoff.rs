// src/handoff.rs

//! Final process hand-off.
//!
//! The launcher replaces its own image with `/bin/bash <script> <args...>`
//! instead of spawning a child. The script inherits the launcher's PID,
//! stdio, controlling terminal, environment, and signal disposition, so
//! interactive behaviour (resize, Ctrl-C, job control) and the exit code
//! are exactly what they would be had the script been invoked directly.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::errors::LauncherError;

/// Well-known absolute path of the wrapped interpreter.
pub const INTERPRETER: &str = "/bin/bash";

/// The fully assembled hand-off: interpreter, script, forwarded arguments.
#[derive(Debug, Clone)]
pub struct InvocationPlan {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub forwarded: Vec<OsString>,
}

impl InvocationPlan {
    pub fn new(script: PathBuf, forwarded: Vec<OsString>) -> Self {
        Self {
            interpreter: PathBuf::from(INTERPRETER),
            script,
            forwarded,
        }
    }

    /// Argument vector exactly as the interpreter will see it.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.forwarded.len() + 2);
        argv.push(self.interpreter.clone().into_os_string());
        argv.push(self.script.clone().into_os_string());
        argv.extend(self.forwarded.iter().cloned());
        argv
    }

    /// Replace the current process image. Returns only on failure.
    #[cfg(unix)]
    pub fn exec(self) -> LauncherError {
        use std::os::unix::process::CommandExt;
        use std::process::Command;
        use tracing::debug;

        debug!(
            interpreter = ?self.interpreter,
            script = ?self.script,
            forwarded = self.forwarded.len(),
            "handing off"
        );

        let source = Command::new(&self.interpreter)
            .arg(&self.script)
            .args(&self.forwarded)
            .exec();

        LauncherError::Handoff {
            interpreter: self.interpreter,
            source,
        }
    }

    // Unreachable behind the platform gate; kept so the crate
    // cross-compiles.
    #[cfg(not(unix))]
    pub fn exec(self) -> LauncherError {
        LauncherError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }
    }
}
