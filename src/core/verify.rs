//! Live firewall verification
//!
//! Runs the compiled show-command for each rule through a shell,
//! captures the tool's raw textual output, and classifies the rule as
//! present, absent, or unrecognized by matching two known output
//! fragments.
//!
//! Commands are always re-derived from the in-memory rule list via
//! [`compile`]; the emitted verify script is a user convenience and is
//! never re-parsed, so the script artifact and the live pass cannot
//! drift apart.
use crate::core::compile::{Operation, compile};
use crate::core::error::{Error, Result};
use crate::core::rules::Rule;
use std::time::Duration;
use tracing::{info, warn};

/// Fragment netsh prints when a show-command matched no rule.
///
/// Locale-dependent: this is the phrase emitted by netsh in its
/// Portuguese (Brazil) configuration, which is what the deployed
/// firewall hosts run. netsh exits non-zero alongside it.
pub const RULE_ABSENT_MARKER: &str =
    "Nenhuma regra correspondente aos critérios especificados.";

/// Fragment netsh prints after successfully listing a matched rule.
///
/// The rule table is followed by a bare `Ok.` confirmation, so its
/// presence means the rule exists in the live configuration.
pub const RULE_PRESENT_MARKER: &str = "Ok.";

/// Upper bound on a single show-command invocation.
///
/// netsh serializes firewall access internally; a hung invocation would
/// otherwise stall the whole verification pass.
pub const INVOCATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Derived presence status of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
pub enum Classification {
    /// Output contained the confirmation fragment
    #[strum(serialize = "found")]
    Found,
    /// Output contained the no-match fragment
    #[strum(serialize = "not found")]
    NotFound,
    /// Output matched neither fragment (unexpected locale, timeout, garbage)
    #[strum(serialize = "unrecognized")]
    Unrecognized,
}

/// Result of verifying a single rule against the live firewall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub rule_name: String,
    pub raw_output: String,
    pub classification: Classification,
}

/// Captured output of one external command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

/// Capability to run a command line through a shell and capture output.
///
/// Injectable so the classifier and the verification loop are testable
/// without a real netsh or elevated privileges. The command must pass
/// through a shell so netsh's own argument parsing applies unchanged.
pub trait CommandRunner {
    fn run(
        &self,
        command_line: &str,
    ) -> impl Future<Output = std::io::Result<CommandOutput>> + Send;
}

/// Production runner: spawns the command through the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> std::io::Result<CommandOutput> {
        let output = shell_command(command_line).output().await?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("cmd");
    command.args(["/C", command_line]);
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("sh");
    command.args(["-c", command_line]);
    command
}

/// Classifies raw show-command output by fragment matching.
///
/// Pure function of the captured text. The no-match fragment is checked
/// first: it is the more specific marker, which keeps classification
/// deterministic even if a tool version ever printed both.
pub fn classify(output: &str) -> Classification {
    if output.contains(RULE_ABSENT_MARKER) {
        Classification::NotFound
    } else if output.contains(RULE_PRESENT_MARKER) {
        Classification::Found
    } else {
        Classification::Unrecognized
    }
}

/// Verifies every rule against the live firewall, in input order.
///
/// Uses [`INVOCATION_TIMEOUT`] per invocation; see
/// [`verify_rules_with_timeout`] for the semantics.
///
/// # Errors
///
/// Returns `Error::Verification` only when the invocation mechanism
/// itself fails (e.g. the shell cannot be spawned).
pub async fn verify_rules<R: CommandRunner>(
    rules: &[Rule],
    runner: &R,
) -> Result<Vec<VerificationOutcome>> {
    verify_rules_with_timeout(rules, runner, INVOCATION_TIMEOUT).await
}

/// Verifies every rule with an explicit per-invocation timeout.
///
/// For each rule the show-command is compiled, run through `runner`, and
/// classified. stdout is preferred; stderr is only consulted when stdout
/// is empty. A non-zero exit status is expected for absent rules and is
/// never an error. A timed-out invocation is recorded as
/// [`Classification::Unrecognized`] and the batch continues; only a
/// runner failure aborts the whole pass.
pub async fn verify_rules_with_timeout<R: CommandRunner>(
    rules: &[Rule],
    runner: &R,
    timeout: Duration,
) -> Result<Vec<VerificationOutcome>> {
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let command = compile(rule, Operation::ShowStatus);

        let outcome = match tokio::time::timeout(timeout, runner.run(&command.command_line)).await
        {
            Ok(Ok(output)) => {
                let raw_output = if output.stdout.is_empty() {
                    output.stderr
                } else {
                    output.stdout
                };
                let classification = classify(&raw_output);

                match classification {
                    Classification::Found => info!("Rule found: '{}'", rule.name),
                    Classification::NotFound => info!("Rule not found: '{}'", rule.name),
                    Classification::Unrecognized => warn!(
                        "Unrecognized show-command output for rule '{}' (exit code {:?})",
                        rule.name, output.exit_code
                    ),
                }

                VerificationOutcome {
                    rule_name: rule.name.clone(),
                    raw_output,
                    classification,
                }
            }
            Ok(Err(e)) => {
                return Err(Error::Verification {
                    rule: rule.name.clone(),
                    message: e.to_string(),
                });
            }
            Err(_) => {
                warn!(
                    "Show-command for rule '{}' timed out after {:?}",
                    rule.name, timeout
                );
                VerificationOutcome {
                    rule_name: rule.name.clone(),
                    raw_output: String::new(),
                    classification: Classification::Unrecognized,
                }
            }
        };

        outcomes.push(outcome);
    }

    info!("Rule verification against the live firewall finished.");
    Ok(outcomes)
}
