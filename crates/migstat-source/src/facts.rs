//! Feeding collected facts into a [`StatusIndex`].
//!
//! Local discovery runs first so each record's `is_present` is set when the
//! record is created; applied ledgers follow and only revise `is_applied`.

use std::path::Path;

use migstat_status::{MigrationRecord, StatusIndex};
use tracing::info;

use crate::applied::read_ledger;
use crate::discover::{discover_versions, DiscoverOptions};
use crate::error::Result;

/// Build an index from a migrations directory and a list of applied ledgers.
///
/// Each ledger is collected into its own index and absorbed into the result,
/// in the order given.
pub fn collect_status<P>(
    source_dir: Option<&Path>,
    options: &DiscoverOptions,
    ledgers: &[P],
) -> Result<StatusIndex>
where
    P: AsRef<Path>,
{
    let mut index = match source_dir {
        Some(dir) => {
            let local: StatusIndex = discover_versions(dir, options)?
                .into_iter()
                .map(MigrationRecord::present)
                .collect();
            info!(dir = %dir.display(), merged = local.len(), "merged local migrations");
            local
        }
        None => StatusIndex::new(),
    };

    for ledger in ledgers {
        let path = ledger.as_ref();
        let applied: StatusIndex = read_ledger(path)?
            .into_iter()
            .map(MigrationRecord::applied)
            .collect();
        index.absorb(&applied);
        info!(ledger = %path.display(), merged = applied.len(), "merged applied ledger");
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn ledgers_only_revise_applied() {
        let dir = tempfile::tempdir().unwrap();
        let migrations = dir.path().join("migrations");
        fs::create_dir(&migrations).unwrap();
        fs::write(migrations.join("1_a.sql"), "").unwrap();
        fs::write(migrations.join("2_b.sql"), "").unwrap();

        let node1 = dir.path().join("node-1.txt");
        let node2 = dir.path().join("node-2.json");
        fs::write(&node1, "2\n2\n").unwrap();
        fs::write(&node2, "[2, 4]").unwrap();

        let idx = collect_status(
            Some(migrations.as_path()),
            &DiscoverOptions::default(),
            &[&node1, &node2],
        )
        .unwrap();

        assert_eq!(idx.len(), 3);
        assert_eq!(idx.lookup(1), Some(&MigrationRecord::new(1, true, false)));
        assert_eq!(idx.lookup(2), Some(&MigrationRecord::new(2, true, true)));
        assert_eq!(idx.lookup(4), Some(&MigrationRecord::new(4, false, true)));
        assert_eq!(idx.versions().as_slice(), &[1, 2, 4]);
    }

    #[test]
    fn collect_status_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let migrations = dir.path().join("migrations");
        fs::create_dir(&migrations).unwrap();
        fs::write(migrations.join("7_init.sql"), "").unwrap();
        fs::write(migrations.join("42_users.sql"), "").unwrap();

        let ledger = dir.path().join("node-1.txt");
        fs::write(&ledger, "7\n").unwrap();

        let idx = collect_status(
            Some(migrations.as_path()),
            &DiscoverOptions::default(),
            &[&ledger],
        )
        .unwrap();

        let expected = concat!(
            "VERSION  SOURCE STATUS  DATABASE STATUS\n",
            "7        Present        Present\n",
            "42       Present        Not Present\n",
        );
        assert_eq!(idx.render(), expected);
    }

    #[test]
    fn collect_status_without_sources_is_empty() {
        let idx = collect_status::<PathBuf>(None, &DiscoverOptions::default(), &[]).unwrap();
        assert!(idx.is_empty());
    }
}
