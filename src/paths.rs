//! Fixed artifact locations and directory management
//!
//! All inputs and outputs live at fixed paths relative to the working
//! directory; the tool takes no flags, so these constants fully
//! determine its behavior.
//!
//! # Layout
//!
//! - `config/firewall_rules.json` - rule source
//! - `scripts/` - generated .bat artifacts
//! - `scripts/output/` - verification report
//! - `logs/` - application and audit logs

use std::path::Path;

/// JSON rule source
pub const RULES_FILE: &str = "config/firewall_rules.json";

/// Generated script directory
pub const SCRIPTS_DIR: &str = "scripts";
/// Report output directory
pub const OUTPUT_DIR: &str = "scripts/output";
/// Log directory
pub const LOGS_DIR: &str = "logs";

/// Script that adds every rule to the live firewall
pub const ADD_SCRIPT: &str = "scripts/add_firewall_rules.bat";
/// Script that queries every rule's status
pub const VERIFY_SCRIPT: &str = "scripts/verify_firewall_rules.bat";
/// Script that removes every rule from the live firewall
pub const DELETE_SCRIPT: &str = "scripts/delete_firewall_rules.bat";

/// Persisted verification report
pub const REPORT_FILE: &str = "scripts/output/firewall_rules_verification.txt";
/// Application log file
pub const LOG_FILE: &str = "logs/app.log";
/// Audit log file (JSON lines)
pub const AUDIT_FILE: &str = "logs/audit.log";

/// Creates the script, output, and log directories if missing.
///
/// # Errors
///
/// Returns `Err` if any directory cannot be created.
pub fn ensure_dirs() -> std::io::Result<()> {
    for dir in [SCRIPTS_DIR, OUTPUT_DIR, LOGS_DIR] {
        std::fs::create_dir_all(Path::new(dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_paths_live_under_their_directories() {
        assert!(ADD_SCRIPT.starts_with(SCRIPTS_DIR));
        assert!(VERIFY_SCRIPT.starts_with(SCRIPTS_DIR));
        assert!(DELETE_SCRIPT.starts_with(SCRIPTS_DIR));
        assert!(REPORT_FILE.starts_with(OUTPUT_DIR));
        assert!(LOG_FILE.starts_with(LOGS_DIR));
        assert!(AUDIT_FILE.starts_with(LOGS_DIR));
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        ensure_dirs().unwrap();
        ensure_dirs().unwrap();
        assert!(Path::new(OUTPUT_DIR).is_dir());
        assert!(Path::new(LOGS_DIR).is_dir());

        std::env::set_current_dir(original).unwrap();
    }
}
