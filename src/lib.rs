//! misragate core library.
//!
//! Classifies cppcheck textual output into MISRA C:2012 rule violations,
//! aggregates counts by rule and severity, and renders a pass/fail report.
//! The pipeline is raw text -> parse -> classify -> aggregate -> report; each
//! stage is a pure transformation and keeps no state across runs.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `rules`: The MISRA rule registry (ids, descriptions, severity classes).
//! - `parse`: One-line cppcheck output parser.
//! - `classify`: Heuristic rule matching and stream aggregation.
//! - `models`: Violation and summary data models.
//! - `output`: Human/JSON printers and exit-status policy.
//! - `utils`: Supporting helpers.
pub mod classify;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod parse;
pub mod rules;
pub mod utils;
