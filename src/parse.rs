//! Parser for one line of cppcheck textual output.
//!
//! Expected shape: `<path>:<line>:<column>: <severity>: <message> [<check-id>]`
//! where the column is optional. Lines that do not look like analyzer output
//! are skipped, never reported as errors; blank lines and prose interleaved in
//! the analyzer's stream are normal input.

use regex::Regex;
use std::sync::LazyLock;

/// Severity tokens cppcheck emits, in the order they are searched for.
pub const SEVERITY_TOKENS: &[&str] = &["error", "warning", "style", "information"];

static CHECK_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\s*$").expect("invalid check-id pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
/// One structured finding extracted from a line of analyzer output.
pub struct ParsedDiagnostic {
    pub file: String,
    /// 0 when the line-number field is absent or unparseable.
    pub line: u32,
    /// The cppcheck severity token that matched (not the MISRA class).
    pub severity_tag: String,
    pub message: String,
    /// Inner text of a trailing `[...]` token in the message, empty if absent.
    pub check_id: String,
}

/// Parse a single line of analyzer output, or `None` when the line carries no
/// diagnostic. Skipping is silent: it is expected input, not a fault.
pub fn parse_line(raw: &str) -> Option<ParsedDiagnostic> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    // A diagnostic candidate carries colon structure and a severity token.
    if !line.contains(':') || !SEVERITY_TOKENS.iter().any(|tok| line.contains(tok)) {
        return None;
    }
    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() < 3 {
        return None;
    }
    let file = parts[0].trim().to_string();
    let line_no = parts[1].trim().parse::<u32>().unwrap_or(0);
    let remainder = parts[2..].join(":");

    // Token priority order, not earliest position: `error` beats a `warning`
    // appearing earlier in the text.
    let (severity_tag, message) = SEVERITY_TOKENS.iter().find_map(|tok| {
        remainder.find(tok).map(|idx| {
            let after = remainder[idx + tok.len()..]
                .trim_start_matches(':')
                .trim()
                .to_string();
            (tok.to_string(), after)
        })
    })?;

    let check_id = CHECK_ID_RE
        .captures(&message)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    Some(ParsedDiagnostic {
        file,
        line: line_no,
        severity_tag,
        message,
        check_id,
    })
}
