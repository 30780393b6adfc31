//! fwbatch - netsh firewall batch generator and verifier
//!
//! Single entry point with no flags: behavior is fully determined by the
//! fixed input and output locations in [`fwbatch::paths`]. The run loads
//! `config/firewall_rules.json`, emits the add/verify/delete batch
//! scripts under `scripts/`, verifies every rule against the live
//! firewall, and persists the raw verification output under
//! `scripts/output/`.
//!
//! Fatal pipeline failures (unreadable rule source, unwritable artifact,
//! broken invocation mechanism) exit non-zero; individual rules being
//! absent from the firewall is an outcome, not a failure.

use clap::Parser;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};

use fwbatch::core::compile::{Operation, compile_all};
use fwbatch::core::verify::{Classification, ShellRunner};
use fwbatch::core::{report, rules, script, verify};
use fwbatch::{audit, paths};

#[derive(Parser)]
#[command(name = "fwbatch")]
#[command(version)]
#[command(about = "Generates netsh advfirewall batch scripts from JSON rules and verifies them against the live firewall", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = paths::ensure_dirs() {
        eprintln!("Error: failed to create working directories: {e}");
        return ExitCode::FAILURE;
    }

    init_logging();

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    match runtime.block_on(run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run aborted: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Sets up tracing output to the fixed log file, falling back to stderr
/// when the file cannot be created.
fn init_logging() {
    if let Ok(file) = std::fs::File::create(paths::LOG_FILE) {
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }
}

/// Runs the full pipeline: load → compile → emit → verify → report.
async fn run() -> fwbatch::Result<()> {
    let rules_path = std::path::Path::new(paths::RULES_FILE);

    let rules = match rules::load_rules(rules_path).await {
        Ok(rules) => {
            audit::log_load(rules.len(), true, None).await;
            rules
        }
        Err(e) => {
            audit::log_load(0, false, Some(e.to_string())).await;
            return Err(e);
        }
    };

    if rules.is_empty() {
        error!("No rules found in '{}'.", paths::RULES_FILE);
        return Ok(());
    }

    info!("{} rule(s) found. Generating batch scripts.", rules.len());

    for (operation, dest) in [
        (Operation::Add, paths::ADD_SCRIPT),
        (Operation::ShowStatus, paths::VERIFY_SCRIPT),
        (Operation::Delete, paths::DELETE_SCRIPT),
    ] {
        let commands = compile_all(&rules, operation);
        match script::emit(&commands, std::path::Path::new(dest)).await {
            Ok(written) => audit::log_emit(dest, written, true, None).await,
            Err(e) => {
                audit::log_emit(dest, 0, false, Some(e.to_string())).await;
                return Err(e);
            }
        }
    }

    let outcomes = match verify::verify_rules(&rules, &ShellRunner).await {
        Ok(outcomes) => {
            let found = count(&outcomes, Classification::Found);
            let not_found = count(&outcomes, Classification::NotFound);
            let unrecognized = count(&outcomes, Classification::Unrecognized);
            audit::log_verify(rules.len(), found, not_found, unrecognized, true, None).await;
            outcomes
        }
        Err(e) => {
            audit::log_verify(rules.len(), 0, 0, 0, false, Some(e.to_string())).await;
            return Err(e);
        }
    };

    let report_text = report::render_report(&outcomes);
    match report::write_report(&report_text, std::path::Path::new(paths::REPORT_FILE)).await {
        Ok(()) => audit::log_report(paths::REPORT_FILE, true, None).await,
        Err(e) => {
            audit::log_report(paths::REPORT_FILE, false, Some(e.to_string())).await;
            return Err(e);
        }
    }

    Ok(())
}

fn count(outcomes: &[fwbatch::VerificationOutcome], classification: Classification) -> usize {
    outcomes
        .iter()
        .filter(|o| o.classification == classification)
        .count()
}
