//! Core rule compilation and verification functionality
//!
//! This module contains the decision logic of the pipeline:
//!
//! - [`rules`]: Rule records and JSON rule source loading
//! - [`compile`]: Rule-to-command compilation for netsh advfirewall
//! - [`script`]: Batch script emission
//! - [`verify`]: Live verification and output classification
//! - [`report`]: Verification report persistence
//! - [`error`]: Error types for pipeline operations

pub mod compile;
pub mod error;
pub mod report;
pub mod rules;
pub mod script;
pub mod verify;
