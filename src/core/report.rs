//! Verification report persistence
//!
//! The report is the concatenation of each rule's captured raw output,
//! newline-joined, in rule order. Nothing is interpreted here; the
//! classifications live in the log, the report preserves the evidence.

use crate::core::error::{Error, Result};
use crate::core::verify::VerificationOutcome;
use std::path::Path;
use tracing::info;

/// Renders the verification outcomes into the report text.
pub fn render_report(outcomes: &[VerificationOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| outcome.raw_output.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the report text to `dest` in a single overwrite.
///
/// No append semantics and no partial-write recovery; a rerun replaces
/// the previous report wholesale.
///
/// # Errors
///
/// Returns `Error::Write` if the destination cannot be created or
/// written.
pub async fn write_report(text: &str, dest: &Path) -> Result<()> {
    tokio::fs::write(dest, text).await.map_err(|e| Error::Write {
        path: dest.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Verification report saved to '{}'.", dest.display());
    Ok(())
}
