// src/normalize.rs

//! Line-ending repair and executable materialization.
//!
//! A script bundled or checked out on Windows can pick up `\r` bytes; Bash
//! then fails on the first affected line with `$'\r': command not found`.
//! Install trees are also frequently read-only and may have lost the
//! executable bit. Rather than distinguish the cases, every run
//! materializes a fresh LF-only copy in the temp directory and marks it
//! executable, leaving the install tree untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::debug;

use crate::errors::{LauncherError, Result};

/// Prefix for materialized copies, so leftover files in the temp directory
/// are attributable to this tool.
pub const TEMP_PREFIX: &str = "nvnodetop_";

/// Mode of the materialized copy. The source file's own bits are ignored.
#[cfg(unix)]
const EXEC_MODE: u32 = 0o755;

/// Strip every carriage-return byte, preserving all other bytes in order.
///
/// Handles CRLF pairs and lone CRs alike; a POSIX shell script never
/// carries a semantically meaningful `\r`, so dropping all of them is
/// lossless.
pub fn strip_carriage_returns(raw: &[u8]) -> Vec<u8> {
    raw.iter().copied().filter(|&b| b != b'\r').collect()
}

/// Produce the file that will actually be handed to the interpreter: a
/// fresh temp copy holding the CR-stripped bytes, mode 0755.
///
/// The copy is intentionally persisted rather than deleted on exit. After
/// the exec the launcher no longer exists and the replacement image may
/// still be reading the script; cleanup belongs to the OS temp-directory
/// retention policy.
pub fn materialize(script: &Path) -> Result<PathBuf> {
    let raw = fs::read(script).map_err(|source| LauncherError::Normalize { source })?;
    let cleaned = strip_carriage_returns(&raw);

    let mut tmp = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".sh")
        .tempfile()
        .map_err(|source| LauncherError::Normalize { source })?;

    tmp.write_all(&cleaned)
        .map_err(|source| LauncherError::Normalize { source })?;
    set_exec_mode(tmp.as_file()).map_err(|source| LauncherError::Normalize { source })?;

    let (_file, path) = tmp
        .keep()
        .map_err(|err| LauncherError::Normalize { source: err.error })?;

    debug!(
        source = ?script,
        copy = ?path,
        stripped = raw.len() - cleaned.len(),
        "materialized runnable copy"
    );
    Ok(path)
}

#[cfg(unix)]
fn set_exec_mode(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = file.metadata()?.permissions();
    perms.set_mode(EXEC_MODE);
    file.set_permissions(perms)
}

// Unreachable behind the platform gate; kept so the crate cross-compiles.
#[cfg(not(unix))]
fn set_exec_mode(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_crlf_pairs() {
        assert_eq!(strip_carriage_returns(b"a\r\nb\r\n"), b"a\nb\n");
    }

    #[test]
    fn strips_lone_crs() {
        assert_eq!(strip_carriage_returns(b"a\rb\rc"), b"abc");
    }

    #[test]
    fn clean_input_is_unchanged() {
        assert_eq!(strip_carriage_returns(b"a\nb\n"), b"a\nb\n");
    }
}
