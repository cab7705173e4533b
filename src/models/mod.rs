//! Shared data models for compliance check output.

use crate::rules::Severity;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
/// A diagnostic attributed to a specific MISRA rule.
pub struct Violation {
    pub rule: String,
    pub file: String,
    pub line: u32,
    /// Original diagnostic message text; the rule description is looked up
    /// from the registry at render time.
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Serialize)]
/// Aggregated counts, always a pure function of the violation list.
pub struct ComplianceSummary {
    pub total: usize,
    pub rules_violated: usize,
    pub mandatory: usize,
    pub required: usize,
    pub advisory: usize,
    pub by_rule: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
/// Check results container consumed by the reporter.
pub struct CheckResult {
    pub violations: Vec<Violation>,
    pub summary: ComplianceSummary,
}
