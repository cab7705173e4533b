//! Output rendering for compliance check results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form serializes
//! the violation list and the summary with a stable shape.

use crate::models::CheckResult;
use crate::rules::{RuleRegistry, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print check results in the requested format.
pub fn print_report(res: &CheckResult, registry: &RuleRegistry, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(res)).unwrap()
        ),
        _ => print_human(res, registry, use_colors(output)),
    }
}

fn print_human(res: &CheckResult, registry: &RuleRegistry, color: bool) {
    if res.violations.is_empty() {
        let banner = "MISRA C:2012 compliance achieved";
        if color {
            println!("{}", banner.green().bold());
        } else {
            println!("{}", banner);
        }
        println!("No violations found");
        return;
    }

    println!("MISRA violations found:");
    for (i, v) in res.violations.iter().enumerate() {
        let location = format!("{}:{}", v.file, v.line);
        if color {
            println!("{:2}. {}", i + 1, location.bold());
        } else {
            println!("{:2}. {}", i + 1, location);
        }
        let description = registry
            .lookup(&v.rule)
            .map(|r| r.description)
            .unwrap_or("Unknown rule");
        println!("    Rule {}: {}", v.rule, description);
        let sev = severity_label(v.severity, color);
        println!("    {} {}", sev, v.message);
        println!();
    }

    let header = "MISRA C:2012 analysis results";
    if color {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "=".repeat(50));
    println!("Total violations: {}", res.summary.total);
    println!("Rules violated: {}", res.summary.rules_violated);
    println!("Mandatory: {}", res.summary.mandatory);
    println!("Required: {}", res.summary.required);
    println!("Advisory: {}", res.summary.advisory);
    println!();
    println!("Violations by rule:");
    // Registry order keeps the table ascending by rule id.
    for rule in registry.all() {
        if let Some(count) = res.summary.by_rule.get(rule.id) {
            println!(
                "  Rule {}: {} violation(s) - {}",
                rule.id, count, rule.description
            );
        }
    }
}

fn severity_label(severity: Severity, color: bool) -> String {
    let tag = format!("[{}]", severity.as_str());
    if !color {
        return tag;
    }
    match severity {
        Severity::Mandatory => tag.red().bold().to_string(),
        Severity::Required => tag.yellow().bold().to_string(),
        Severity::Advisory => tag.blue().bold().to_string(),
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(res: &CheckResult) -> JsonVal {
    // Directly serialize CheckResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

/// Exit status for a finished run: the violation count, capped to the 8-bit
/// range POSIX exit codes can carry. The uncapped count stays available in
/// the summary.
pub fn exit_status(violation_count: usize) -> i32 {
    violation_count.min(255) as i32
}
