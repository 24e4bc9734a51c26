use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use migstat_status::TableConfig;
use serde::{Deserialize, Serialize};

use crate::cli::StatusArgs;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "migstat.toml";

/// File-based defaults for `migstat`. Command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding migration files.
    pub source_dir: Option<PathBuf>,
    /// Applied-version ledgers, merged in order.
    pub applied: Vec<PathBuf>,
    /// Descend into subdirectories of `source_dir`.
    pub recursive: bool,
    /// Tab-stop settings for the status table.
    pub table: TableConfig,
}

impl CliConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid migstat config")
    }

    /// Load the config at `path`, or `./migstat.toml` if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&text)
    }
}

/// Effective inputs for a status run after applying flag overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSettings {
    pub source_dir: Option<PathBuf>,
    pub applied: Vec<PathBuf>,
    pub recursive: bool,
    pub table: TableConfig,
}

impl StatusSettings {
    pub fn resolve(args: &StatusArgs, config: &CliConfig) -> Self {
        let applied = if args.applied.is_empty() {
            config.applied.clone()
        } else {
            args.applied.clone()
        };
        Self {
            source_dir: args.source.clone().or_else(|| config.source_dir.clone()),
            applied,
            recursive: args.recursive || config.recursive,
            table: config.table.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> StatusArgs {
        StatusArgs {
            source: None,
            applied: Vec::new(),
            recursive: false,
            summary: false,
        }
    }

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert!(c.source_dir.is_none());
        assert!(c.applied.is_empty());
        assert!(!c.recursive);
        assert_eq!(c.table, TableConfig::default());
    }

    #[test]
    fn parse_toml_config() {
        let c = CliConfig::from_toml(
            r#"
            source_dir = "db/migrations"
            applied = ["exports/node-1.txt", "exports/node-2.json"]
            recursive = true

            [table]
            padding = 3
            "#,
        )
        .unwrap();
        assert_eq!(c.source_dir, Some(PathBuf::from("db/migrations")));
        assert_eq!(c.applied.len(), 2);
        assert!(c.recursive);
        assert_eq!(c.table.padding, 3);
        assert_eq!(c.table.tab_width, 8);
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(CliConfig::from_toml("recursive = \"yes\"").is_err());
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ci.toml");
        fs::write(&path, "source_dir = \"m\"\n").unwrap();
        let c = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(c.source_dir, Some(PathBuf::from("m")));
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = CliConfig {
            source_dir: Some("from-config".into()),
            applied: vec!["config-ledger.txt".into()],
            recursive: false,
            table: TableConfig::default(),
        };
        let mut a = args();
        a.source = Some("from-flag".into());
        a.applied = vec!["flag-ledger.txt".into()];
        a.recursive = true;

        let s = StatusSettings::resolve(&a, &config);
        assert_eq!(s.source_dir, Some(PathBuf::from("from-flag")));
        assert_eq!(s.applied, vec![PathBuf::from("flag-ledger.txt")]);
        assert!(s.recursive);
    }

    #[test]
    fn config_fills_missing_flags() {
        let config = CliConfig {
            source_dir: Some("from-config".into()),
            applied: vec!["config-ledger.txt".into()],
            recursive: true,
            table: TableConfig::default(),
        };
        let s = StatusSettings::resolve(&args(), &config);
        assert_eq!(s.source_dir, Some(PathBuf::from("from-config")));
        assert_eq!(s.applied, vec![PathBuf::from("config-ledger.txt")]);
        assert!(s.recursive);
    }
}
