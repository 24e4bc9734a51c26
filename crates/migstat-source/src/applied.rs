//! Applied-version ledgers exported from cluster members.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - plain text: one version per line; blank lines and `#` comments are
//!   ignored;
//! - JSON (`.json`): an array of integers, or of objects carrying a
//!   `version` field.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SourceError};

/// On-disk format of an applied ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerFormat {
    Text,
    Json,
}

impl LedgerFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => LedgerFormat::Json,
            _ => LedgerFormat::Text,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Version(u64),
    Record { version: u64 },
}

impl JsonEntry {
    fn version(&self) -> u64 {
        match self {
            JsonEntry::Version(v) | JsonEntry::Record { version: v } => *v,
        }
    }
}

/// Parse a plain-text ledger. `path` is only used for error reporting.
pub fn parse_text_ledger(path: &Path, contents: &str) -> Result<Vec<u64>> {
    let mut versions = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let version = line.parse::<u64>().map_err(|e| SourceError::Ledger {
            path: path.to_path_buf(),
            line: i + 1,
            reason: format!("{line:?}: {e}"),
        })?;
        versions.push(version);
    }
    Ok(versions)
}

/// Parse a JSON ledger. `path` is only used for error reporting.
pub fn parse_json_ledger(path: &Path, contents: &str) -> Result<Vec<u64>> {
    let entries: Vec<JsonEntry> =
        serde_json::from_str(contents).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(entries.iter().map(JsonEntry::version).collect())
}

/// Read the applied versions listed in the ledger at `path`.
pub fn read_ledger(path: &Path) -> Result<Vec<u64>> {
    let contents = fs::read_to_string(path)?;
    let versions = match LedgerFormat::from_path(path) {
        LedgerFormat::Text => parse_text_ledger(path, &contents)?,
        LedgerFormat::Json => parse_json_ledger(path, &contents)?,
    };
    debug!(path = %path.display(), count = versions.len(), "read applied ledger");
    Ok(versions)
}
