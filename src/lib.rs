//! fwbatch - netsh firewall batch generator and verifier
//!
//! Compiles a declarative JSON list of firewall rules into executable
//! `netsh advfirewall` batch scripts (add / show / delete) and verifies
//! each rule against the live firewall by running its show-command and
//! classifying the tool's textual output.
//!
//! # Architecture
//!
//! - [`core`] - Rule loading, command compilation, script emission,
//!   verification, and report persistence
//! - [`audit`] - Structured audit trail of each pipeline stage
//! - [`validators`] - Rule-name constraints for safe command embedding
//! - [`paths`] - Fixed artifact locations and directory management
//!
//! # Pipeline
//!
//! Loader → compiler (three passes: add, show, delete) → script emitter
//! (three artifacts) → verifier (live show-commands re-derived from the
//! in-memory rules) → report writer. Fully sequential; the workload is
//! bounded by the configured rule count and netsh serializes firewall
//! access anyway.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod audit;
pub mod core;
pub mod paths;
pub mod validators;

// Re-export commonly used types
pub use core::compile::{CompiledCommand, Operation};
pub use core::error::{Error, Result};
pub use core::rules::Rule;
pub use core::verify::{Classification, VerificationOutcome};
