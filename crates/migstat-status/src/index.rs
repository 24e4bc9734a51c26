//! The in-memory migration status index.
//!
//! [`StatusIndex`] keeps a `BTreeMap<u64, MigrationRecord>` as the source of
//! truth plus an [`OrderedVersions`] view rebuilt from the map's keys. All
//! operations are in-memory; discovering migration files and querying the
//! database are the responsibility of the caller.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::config::TableConfig;
use crate::ordered::OrderedVersions;
use crate::record::MigrationRecord;
use crate::render::StatusTable;
use crate::summary::StatusSummary;

/// Merged source/database status for a set of migration versions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusIndex {
    records: BTreeMap<u64, MigrationRecord>,
    ordered: OrderedVersions,
}

impl StatusIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct versions in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no version has been merged.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ---------------------------------------------------------------
    // Merge
    // ---------------------------------------------------------------

    /// Merge an observed fact into the index.
    ///
    /// A new version is inserted as given. For a version already in the
    /// index only `is_applied` is overwritten; `is_present` keeps the value
    /// from the first merge. `None` leaves the index untouched.
    ///
    /// Returns `true` iff the index was mutated.
    pub fn merge(&mut self, record: Option<MigrationRecord>) -> bool {
        let Some(record) = record else {
            return false;
        };

        match self.records.get_mut(&record.version) {
            Some(existing) => {
                debug!(
                    version = record.version,
                    applied = record.is_applied,
                    "updated migration status"
                );
                existing.is_applied = record.is_applied;
            }
            None => {
                debug!(
                    version = record.version,
                    present = record.is_present,
                    applied = record.is_applied,
                    "inserted migration status"
                );
                self.records.insert(record.version, record);
            }
        }

        self.rebuild_order();
        true
    }

    /// Record that `version` exists in the local source.
    pub fn mark_present(&mut self, version: u64) -> bool {
        self.merge(Some(MigrationRecord::present(version)))
    }

    /// Record that `version` is applied on the database.
    pub fn mark_applied(&mut self, version: u64) -> bool {
        self.merge(Some(MigrationRecord::applied(version)))
    }

    /// Merge every record of `other`, in ascending version order.
    ///
    /// Used to combine per-source indices built independently.
    pub fn absorb(&mut self, other: &StatusIndex) {
        for record in other.iter() {
            self.merge(Some(*record));
        }
    }

    fn rebuild_order(&mut self) {
        self.ordered.rebuild_from(self.records.keys().copied());
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// Get the record for `version`.
    pub fn lookup(&self, version: u64) -> Option<&MigrationRecord> {
        self.records.get(&version)
    }

    /// Position of `version` in the ordered view, or `None` if absent.
    pub fn find_position(&self, version: u64) -> Option<usize> {
        if self.ordered.is_empty() {
            return None;
        }
        let pos = self.ordered.lower_bound(version);
        match self.ordered.get(pos) {
            Some(found) if found == version => Some(pos),
            _ => None,
        }
    }

    /// The ordered view of versions.
    pub fn versions(&self) -> &OrderedVersions {
        &self.ordered
    }

    /// Iterate the records in ascending version order.
    pub fn iter(&self) -> impl Iterator<Item = &MigrationRecord> + '_ {
        self.ordered
            .iter()
            .filter_map(move |version| self.records.get(&version))
    }

    /// Tally present, applied, pending and orphaned versions.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_records(self.iter())
    }

    // ---------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------

    /// Render the status table with the default tab-stop settings.
    pub fn render(&self) -> String {
        StatusTable::new(self).to_string()
    }

    /// Render the status table with explicit tab-stop settings.
    pub fn render_with(&self, config: &TableConfig) -> String {
        StatusTable::with_config(self, config.clone()).to_string()
    }
}

impl fmt::Display for StatusIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&StatusTable::new(self), f)
    }
}

impl Extend<MigrationRecord> for StatusIndex {
    fn extend<T: IntoIterator<Item = MigrationRecord>>(&mut self, iter: T) {
        for record in iter {
            self.merge(Some(record));
        }
    }
}

impl FromIterator<MigrationRecord> for StatusIndex {
    fn from_iter<T: IntoIterator<Item = MigrationRecord>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
