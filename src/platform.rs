// src/platform.rs

//! Host platform gate.
//!
//! The wrapped payload is a Bash script; Windows cannot run it natively.
//! The check runs before any temp file is created, so an unsupported host
//! never accumulates artifacts it will never use.

use crate::errors::{LauncherError, Result};

/// OS family the launcher refuses to hand off on.
const UNSUPPORTED_OS: &str = "windows";

/// Refuse to continue on hosts that cannot run the wrapped interpreter.
pub fn ensure_supported() -> Result<()> {
    gate(std::env::consts::OS)
}

/// Inner check, split out so tests can simulate a foreign host.
pub fn gate(os: &str) -> Result<()> {
    if os == UNSUPPORTED_OS {
        return Err(LauncherError::UnsupportedPlatform { os: os.to_string() });
    }
    Ok(())
}
