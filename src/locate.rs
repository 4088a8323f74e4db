// src/locate.rs

//! Resolution of the bundled `nvnodetop.sh` inside the installed tree.
//!
//! The script ships either next to the launcher binary or under the
//! conventional `../share/nvnodetop/` data directory, depending on how the
//! package was installed. `NVNODETOP_SCRIPT` overrides both, which is
//! mainly useful for development checkouts.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use tracing::debug;

use crate::errors::{LauncherError, Result};

/// Logical filename of the bundled payload.
pub const SCRIPT_NAME: &str = "nvnodetop.sh";

/// Environment variable overriding the resolved script path.
pub const SCRIPT_ENV: &str = "NVNODETOP_SCRIPT";

/// Resolve the absolute path of the bundled script.
///
/// The returned path denotes a regular, readable file for the remainder of
/// the launcher's run; a miss under every candidate is a packaging-integrity
/// failure, not a generic not-found.
pub fn bundled_script() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(SCRIPT_ENV).map(PathBuf::from) {
        debug!(path = ?path, "script path taken from {}", SCRIPT_ENV);
        if !path.is_file() {
            return Err(anyhow!("{SCRIPT_ENV} points at {path:?}, which is not a regular file").into());
        }
        return Ok(path);
    }

    let exe = std::env::current_exe().context("resolving the launcher's own path")?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    locate_under(exe_dir, SCRIPT_NAME)
}

/// Probe the conventional install locations under `base` for `name`.
///
/// Split from [`bundled_script`] so tests can point it at a scratch tree.
pub fn locate_under(base: &Path, name: &str) -> Result<PathBuf> {
    let candidates = [
        base.join(name),
        base.join("..").join("share").join("nvnodetop").join(name),
    ];

    for candidate in &candidates {
        debug!(path = ?candidate, "probing for bundled script");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(LauncherError::PackagingIntegrity {
        script: name.to_string(),
        searched: base.to_path_buf(),
    })
}
