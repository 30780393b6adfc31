//! Input validation for fwbatch
//!
//! Rule names are embedded verbatim inside double quotes in generated
//! netsh command lines; the compiler performs no escaping. Names that
//! would break out of the quoting are therefore rejected here, at the
//! loading boundary, before any command is derived from them.

/// Validates a rule name for safe verbatim embedding in a command line.
///
/// Constraints:
/// - Non-empty: netsh rejects `name=""` and an empty name would make the
///   generated script fail silently.
/// - No double quotes: the compiler inserts the name inside `"`...`"`
///   without escaping, so an embedded quote truncates the argument.
/// - No control characters: a newline would split one generated command
///   into two script lines.
///
/// # Errors
///
/// Returns `Err` with a human-readable reason if the name violates any
/// constraint.
pub fn validate_rule_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }

    if name.contains('"') {
        return Err("name cannot contain double quotes".to_string());
    }

    if name.chars().any(char::is_control) {
        return Err("name cannot contain control characters".to_string());
    }

    Ok(())
}
