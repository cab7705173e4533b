//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "misragate",
    version,
    about = "MISRA C:2012 compliance gate over cppcheck output",
    long_about = "misragate — classify cppcheck textual output into MISRA C:2012 rule \
violations and gate a build on the result.\n\nThe exit status equals the violation \
count (capped at 255); 0 means full compliance.\n\nConfiguration precedence: CLI > \
misragate.toml > defaults.",
    after_help = "Examples:\n  cppcheck --enable=all src/ 2> cppcheck.txt\n  misragate cppcheck.txt\n  misragate cppcheck.txt --output json\n  misragate cppcheck.txt --disable 8.9 --disable 8.13"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to a file containing cppcheck textual output")]
    pub input: PathBuf,
    #[arg(long, help = "Repository root for config discovery (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(
        long = "disable",
        value_name = "RULE",
        help = "Disable a rule id for this run (repeatable)"
    )]
    pub disable: Vec<String>,
}
