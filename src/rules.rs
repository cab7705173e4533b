//! MISRA C:2012 rule registry.
//!
//! The set of recognized rules is closed and known at compile time. The
//! registry is built once at startup; configuration decides which rules are
//! enabled for matching, the table itself never changes at runtime.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// MISRA severity class of a rule (distinct from cppcheck's own severities).
pub enum Severity {
    Mandatory,
    Required,
    Advisory,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mandatory => "mandatory",
            Severity::Required => "required",
            Severity::Advisory => "advisory",
        }
    }
}

#[derive(Debug, Clone)]
/// A single MISRA rule entry.
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub enabled: bool,
}

// Ascending by numeric (major, minor) rule id. Rules without a matching
// predicate in `classify` are recognized but never triggered.
const RULE_TABLE: &[(&str, &str, Severity)] = &[
    ("1.1", "Code shall conform to C99", Severity::Required),
    ("2.1", "Code shall not be unreachable", Severity::Required),
    ("2.7", "Parameters should be used in functions", Severity::Required),
    (
        "5.3",
        "Identifier shall not shadow another identifier",
        Severity::Required,
    ),
    ("8.9", "Variable scope should be minimized", Severity::Advisory),
    (
        "8.13",
        "Read-only parameters should be const-qualified",
        Severity::Advisory,
    ),
    (
        "9.1",
        "Variables shall be initialized before use",
        Severity::Mandatory,
    ),
    (
        "14.3",
        "Controlling expressions shall not be invariant",
        Severity::Required,
    ),
    (
        "16.5",
        "Function-like macros shall use assertions",
        Severity::Required,
    ),
    (
        "17.2",
        "Functions shall not call themselves recursively",
        Severity::Required,
    ),
    (
        "17.7",
        "Return value of functions shall be used",
        Severity::Required,
    ),
    (
        "21.3",
        "Dynamic memory allocation shall not be used",
        Severity::Required,
    ),
];

/// Immutable registry of recognized rules, constructed once per run.
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Registry with every rule enabled (the default configuration).
    pub fn new() -> Self {
        Self::with_disabled(&BTreeSet::new())
    }

    /// Registry with the given rule ids disabled for matching. Unknown ids
    /// are ignored.
    pub fn with_disabled(disabled: &BTreeSet<String>) -> Self {
        let rules = RULE_TABLE
            .iter()
            .map(|&(id, description, severity)| Rule {
                id,
                description,
                severity,
                enabled: !disabled.contains(id),
            })
            .collect();
        RuleRegistry { rules }
    }

    /// Look up a rule by id.
    pub fn lookup(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// All recognized rules, ascending by rule id.
    pub fn all(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.lookup(id).map(|r| r.enabled).unwrap_or(false)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
