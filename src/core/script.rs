//! Batch script emission
//!
//! Writes an ordered batch of compiled commands to an executable .bat
//! artifact: one command per line, in input order, terminated by a
//! `pause` directive so an interactively launched script does not close
//! before its output can be read.

use crate::core::compile::CompiledCommand;
use crate::core::error::{Error, Result};
use std::path::Path;
use tracing::info;

/// Terminal directive appended to every emitted script
const PAUSE_DIRECTIVE: &str = "pause";

/// Emits compiled commands to a batch script at `dest`.
///
/// Overwrites any existing content. The final `pause` line carries no
/// trailing newline, matching the artifact format netsh batch consumers
/// already rely on.
///
/// Returns the number of commands written (the script itself has one
/// more line for the `pause`).
///
/// # Errors
///
/// Returns `Error::Write` if the destination cannot be created or
/// written.
pub async fn emit(commands: &[CompiledCommand], dest: &Path) -> Result<usize> {
    let mut body = String::new();
    for command in commands {
        body.push_str(&command.command_line);
        body.push('\n');
    }
    body.push_str(PAUSE_DIRECTIVE);

    tokio::fs::write(dest, body).await.map_err(|e| Error::Write {
        path: dest.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Batch script '{}' created successfully.", dest.display());
    Ok(commands.len())
}
