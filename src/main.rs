//! misragate CLI binary entry point.
//! Parses arguments, runs the check pipeline, and exits with the violation
//! count (capped) so CI can gate on the result.

use clap::error::ErrorKind;
use clap::Parser;
use misragate::cli::Cli;
use misragate::{classify, config, output, rules, utils};
use std::fs;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        // Usage errors exit 1, keeping violation-count exits distinguishable
        // only by the printed usage text (legacy contract).
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.output.as_deref(),
        &cli.disable,
    );

    if !cli.input.exists() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("input file not found: {}", cli.input.display())
        );
        std::process::exit(1);
    }

    // Best-effort decode: analyzer output may carry stray non-UTF-8 bytes.
    let content = match fs::read(&cli.input) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("failed to read {}: {}", cli.input.display(), e)
            );
            std::process::exit(1);
        }
    };

    if eff.output != "json" {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            format!("analyzing cppcheck output: {}", cli.input.display())
        );
    }

    let registry = rules::RuleRegistry::with_disabled(&eff.disabled);
    let res = classify::run_check(&content, &registry);
    output::print_report(&res, &registry, &eff.output);
    std::process::exit(output::exit_status(res.summary.total));
}
