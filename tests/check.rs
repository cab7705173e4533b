//! End-to-end pipeline tests through the library API: on-disk analyzer
//! output in, violations and exit status out.

use misragate::classify::{classify_stream, run_check, summarize};
use misragate::config;
use misragate::output::{compose_report_json, exit_status};
use misragate::parse::parse_line;
use misragate::rules::RuleRegistry;
use std::fs;

const MIXED_OUTPUT: &str = "\
Checking src/app.c ...
src/app.c:42:5: warning: parameter never used
src/app.c:10:1: error: Memory leak: malloc returned pointer lost
just some noise
src/util.c:7:3: style: Local variable 'n' shadows outer variable [shadowVariable]
src/util.c:8:3: style: Array index check is off by one
src/app.c:0:0: information: Limiting analysis of branches
";

#[test]
fn parameter_never_used_line_classifies_to_2_7() {
    let reg = RuleRegistry::new();
    let violations = classify_stream("src/app.c:42:5: warning: parameter never used", &reg);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "2.7");
    assert_eq!(violations[0].file, "src/app.c");
    assert_eq!(violations[0].line, 42);
}

#[test]
fn malloc_leak_line_classifies_to_21_3() {
    let reg = RuleRegistry::new();
    let violations = classify_stream(
        "src/app.c:10:1: error: Memory leak: malloc returned pointer lost",
        &reg,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "21.3");
}

#[test]
fn noise_line_contributes_nothing() {
    assert!(parse_line("just some noise").is_none());
    let reg = RuleRegistry::new();
    assert!(classify_stream("just some noise", &reg).is_empty());
}

#[test]
fn mixed_stream_counts_only_classifiable_lines() {
    let reg = RuleRegistry::new();
    let res = run_check(MIXED_OUTPUT, &reg);
    // 3 classifiable lines (2.7, 21.3, 5.3); the off-by-one style line parses
    // but matches no rule, the rest never parse.
    assert_eq!(res.summary.total, 3);
    assert_eq!(exit_status(res.summary.total), 3);
    let rules: Vec<&str> = res.violations.iter().map(|v| v.rule.as_str()).collect();
    assert_eq!(rules, vec!["2.7", "21.3", "5.3"]);
}

#[test]
fn token_free_input_is_fully_compliant() {
    let reg = RuleRegistry::new();
    let res = run_check("Checking src/app.c ...\nall done\n", &reg);
    assert!(res.violations.is_empty());
    assert_eq!(exit_status(res.summary.total), 0);
}

#[test]
fn summary_is_a_pure_function_of_the_violation_list() {
    let reg = RuleRegistry::new();
    let violations = classify_stream(MIXED_OUTPUT, &reg);
    let s1 = summarize(&violations);
    let s2 = summarize(&violations);
    assert_eq!(s1.total, violations.len());
    assert_eq!(s1.by_rule.values().sum::<usize>(), s1.total);
    assert_eq!(s1.total, s2.total);
    assert_eq!(s1.by_rule, s2.by_rule);
    assert_eq!(s1.mandatory + s1.required + s1.advisory, s1.total);
}

#[test]
fn pipeline_reads_analyzer_output_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cppcheck.txt");
    fs::write(&input, MIXED_OUTPUT).unwrap();

    let bytes = fs::read(&input).unwrap();
    let content = String::from_utf8_lossy(&bytes);
    let reg = RuleRegistry::new();
    let res = run_check(&content, &reg);
    assert_eq!(res.summary.total, 3);

    let json = compose_report_json(&res);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["rules_violated"], 3);
}

#[test]
fn config_disables_rules_for_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("misragate.toml"),
        "[rules]\ndisable = [\"5.3\"]\n",
    )
    .unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let eff = config::resolve_effective(Some(&root), None, &[]);

    let reg = RuleRegistry::with_disabled(&eff.disabled);
    let res = run_check(MIXED_OUTPUT, &reg);
    assert_eq!(res.summary.total, 2);
    assert!(res.violations.iter().all(|v| v.rule != "5.3"));
}

#[test]
fn lossy_decode_keeps_surrounding_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cppcheck.txt");
    let mut bytes = b"src/app.c:1:1: warning: unused parameter '".to_vec();
    bytes.push(0xff); // invalid UTF-8 in an identifier
    bytes.extend_from_slice(b"'\n");
    fs::write(&input, &bytes).unwrap();

    let content = String::from_utf8_lossy(&fs::read(&input).unwrap()).into_owned();
    let reg = RuleRegistry::new();
    let res = run_check(&content, &reg);
    assert_eq!(res.summary.total, 1);
    assert_eq!(res.violations[0].rule, "2.7");
}
