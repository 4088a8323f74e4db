// src/lib.rs

pub mod cli;
pub mod errors;
pub mod handoff;
pub mod locate;
pub mod logging;
pub mod normalize;
pub mod platform;

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::handoff::InvocationPlan;

/// High-level entry point used by `main.rs`.
///
/// Stage order is a hard contract: resolution and the platform gate run
/// before anything is written to disk, the normalized copy is created next,
/// and the exec comes last. On success this function never returns — the
/// process image is replaced by the interpreter.
pub fn run(args: CliArgs) -> Result<()> {
    let script = locate::bundled_script()?;
    debug!(script = ?script, "resolved bundled script");

    platform::ensure_supported()?;

    let instance = normalize::materialize(&script)?;
    let plan = InvocationPlan::new(instance, args.forwarded);

    // exec only comes back on failure.
    Err(plan.exec())
}
