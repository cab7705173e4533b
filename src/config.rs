//! Configuration discovery and effective settings resolution.
//!
//! misragate reads `misragate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `rules.disable`: empty (every recognized rule enabled)
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule enablement section under `[rules]`.
pub struct RulesCfg {
    #[serde(default)]
    pub disable: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `misragate.toml|yaml`.
pub struct GateConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub disabled: BTreeSet<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `misragate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("misragate.toml").exists()
            || cur.join("misragate.yaml").exists()
            || cur.join("misragate.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `GateConfig` from `misragate.toml` or `misragate.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<GateConfig> {
    let toml_path = root.join("misragate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: GateConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["misragate.yaml", "misragate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: GateConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// CLI `--disable` entries are added on top of the config file's list; a rule
/// disabled anywhere stays disabled for the run.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_disable: &[String],
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let mut disabled: BTreeSet<String> = cfg
        .rules
        .map(|r| r.disable.into_iter().collect())
        .unwrap_or_default();
    disabled.extend(cli_disable.iter().cloned());

    Effective {
        repo_root,
        output,
        disabled,
    }
}
