//! Heuristic mapping from parsed diagnostics to MISRA rules, plus the
//! aggregation over a whole analyzer output stream.
//!
//! Matching is a best-effort keyword heuristic over the analyzer's prose
//! messages, not a verified rule check. Predicates run in ascending rule-id
//! order and the first match wins; a diagnostic is attributed to at most one
//! rule. Rules present in the registry without a predicate here ("1.1",
//! "2.1", "9.1", "16.5", "17.2") are never matched.

use crate::models::{CheckResult, ComplianceSummary, Violation};
use crate::parse::{parse_line, ParsedDiagnostic};
use crate::rules::{RuleRegistry, Severity};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Rules with an active predicate, in priority order (ascending rule id).
const MATCH_ORDER: &[&str] = &["2.7", "5.3", "8.9", "8.13", "14.3", "17.7", "21.3"];

/// Map a diagnostic to the single best-matching enabled rule id, if any.
pub fn classify(diag: &ParsedDiagnostic, registry: &RuleRegistry) -> Option<&'static str> {
    let msg = diag.message.to_lowercase();
    let check_id = diag.check_id.to_lowercase();
    MATCH_ORDER
        .iter()
        .copied()
        .find(|id| registry.is_enabled(id) && predicate_matches(id, &msg, &check_id))
}

fn predicate_matches(rule_id: &str, msg: &str, check_id: &str) -> bool {
    match rule_id {
        "2.7" => msg.contains("unused parameter") || msg.contains("parameter never used"),
        "5.3" => msg.contains("shadow"),
        "8.9" => {
            msg.contains("scope")
                && (msg.contains("can be reduced")
                    || msg.contains("minimize scope")
                    || msg.contains("reduce"))
        }
        "8.13" => {
            (msg.contains("const") && msg.contains("parameter"))
                || check_id.contains("constparameter")
        }
        "14.3" => {
            msg.contains("always true")
                || msg.contains("always false")
                || msg.contains("invariant")
                || msg.contains("condition is always")
        }
        // Extended 17.7 policy: any return-value mention triggers, not only
        // the unused case. See DESIGN.md.
        "17.7" => {
            msg.contains("return value")
                || msg.contains("unused return")
                || msg.contains("ignored return")
        }
        "21.3" => ["malloc", "calloc", "realloc", "free", "dynamic"]
            .iter()
            .any(|w| msg.contains(w)),
        _ => false,
    }
}

/// Classify a whole analyzer output stream into violations, preserving input
/// order. Lines are independent, so the work is spread across a thread pool;
/// the indexed collect keeps the original ordering.
pub fn classify_stream(content: &str, registry: &RuleRegistry) -> Vec<Violation> {
    let lines: Vec<&str> = content.lines().collect();
    lines
        .par_iter()
        .filter_map(|raw| {
            let diag = parse_line(raw)?;
            let rule_id = classify(&diag, registry)?;
            let rule = registry.lookup(rule_id)?;
            Some(Violation {
                rule: rule_id.to_string(),
                file: diag.file,
                line: diag.line,
                message: diag.message,
                severity: rule.severity,
            })
        })
        .collect()
}

/// Pure reduction of a violation list into aggregate counts.
pub fn summarize(violations: &[Violation]) -> ComplianceSummary {
    let mut by_rule: BTreeMap<String, usize> = BTreeMap::new();
    let mut mandatory = 0usize;
    let mut required = 0usize;
    let mut advisory = 0usize;
    for v in violations {
        *by_rule.entry(v.rule.clone()).or_insert(0) += 1;
        match v.severity {
            Severity::Mandatory => mandatory += 1,
            Severity::Required => required += 1,
            Severity::Advisory => advisory += 1,
        }
    }
    ComplianceSummary {
        total: violations.len(),
        rules_violated: by_rule.len(),
        mandatory,
        required,
        advisory,
        by_rule,
    }
}

/// Run the full pipeline over one analyzer output text.
pub fn run_check(content: &str, registry: &RuleRegistry) -> CheckResult {
    let violations = classify_stream(content, registry);
    let summary = summarize(&violations);
    CheckResult {
        violations,
        summary,
    }
}
