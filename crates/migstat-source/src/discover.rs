//! Local migration discovery.
//!
//! A file names a migration when its file name starts with a run of ASCII
//! digits followed by `_` or `.`, e.g. `20240101120000_create_users.up.sql`
//! or `7.sql`. The digit run is the version. Up/down pairs collapse into a
//! single version.

use std::collections::BTreeSet;
use std::num::ParseIntError;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SourceError};

/// Options controlling directory discovery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoverOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
}

/// Extract the version prefix from a migration file name.
///
/// Returns `None` when the name does not look like a migration, and
/// `Some(Err(_))` when the digit run does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use migstat_source::discover::parse_version;
///
/// assert_eq!(parse_version("0042_add_index.sql"), Some(Ok(42)));
/// assert_eq!(parse_version("7.up.sql"), Some(Ok(7)));
/// assert_eq!(parse_version("README.md"), None);
/// ```
pub fn parse_version(file_name: &str) -> Option<std::result::Result<u64, ParseIntError>> {
    let digits = file_name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(file_name.len());
    if digits == 0 {
        return None;
    }
    match file_name[digits..].chars().next() {
        Some('_') | Some('.') => Some(file_name[..digits].parse()),
        _ => None,
    }
}

/// Walk `dir` and return the distinct migration versions found, ascending.
pub fn discover_versions(dir: &Path, options: &DiscoverOptions) -> Result<Vec<u64>> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut versions = BTreeSet::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        match parse_version(name) {
            Some(Ok(version)) => {
                debug!(version, file = name, "discovered migration");
                versions.insert(version);
            }
            Some(Err(e)) => {
                return Err(SourceError::InvalidVersion {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
            None => debug!(file = name, "not a migration file"),
        }
    }

    debug!(dir = %dir.display(), count = versions.len(), "discovery complete");
    Ok(versions.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"-- sql").unwrap();
    }

    #[test]
    fn parse_version_accepts_prefixes() {
        assert_eq!(parse_version("20240101120000_init.up.sql"), Some(Ok(20240101120000)));
        assert_eq!(parse_version("1_a.sql"), Some(Ok(1)));
        assert_eq!(parse_version("0.sql"), Some(Ok(0)));
    }

    #[test]
    fn parse_version_rejects_non_migrations() {
        assert_eq!(parse_version("notes.txt"), None);
        assert_eq!(parse_version("12"), None);
        assert_eq!(parse_version("12abc.sql"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn parse_version_overflow_is_error() {
        assert!(matches!(parse_version("99999999999999999999_x.sql"), Some(Err(_))));
    }

    #[test]
    fn discovers_sorted_distinct_versions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "42_add_index.up.sql");
        touch(dir.path(), "42_add_index.down.sql");
        touch(dir.path(), "7_init.up.sql");
        touch(dir.path(), "README.md");

        let versions = discover_versions(dir.path(), &DiscoverOptions::default()).unwrap();
        assert_eq!(versions, vec![7, 42]);
    }

    #[test]
    fn recursion_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1_top.sql");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "2_deep.sql");

        let flat = discover_versions(dir.path(), &DiscoverOptions::default()).unwrap();
        assert_eq!(flat, vec![1]);

        let deep = discover_versions(dir.path(), &DiscoverOptions { recursive: true }).unwrap();
        assert_eq!(deep, vec![1, 2]);
    }

    #[test]
    fn overflowing_version_fails_discovery() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "99999999999999999999_big.sql");
        let result = discover_versions(dir.path(), &DiscoverOptions::default());
        assert!(matches!(result, Err(SourceError::InvalidVersion { .. })));
    }

    #[test]
    fn missing_directory_is_walk_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_versions(&dir.path().join("absent"), &DiscoverOptions::default());
        assert!(matches!(result, Err(SourceError::Walk(_))));
    }
}
