//! Aggregate counts over a status index.

use serde::{Deserialize, Serialize};

use crate::record::MigrationRecord;

/// Counts of migrations by reconciliation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Distinct versions known to the index.
    pub total: usize,
    /// Versions with a local definition.
    pub present: usize,
    /// Versions recorded as applied on the database.
    pub applied: usize,
    /// Present locally but not applied.
    pub pending: usize,
    /// Applied with no local definition.
    pub orphaned: usize,
    /// Neither present locally nor applied.
    pub unknown: usize,
}

impl StatusSummary {
    /// Tally a sequence of records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MigrationRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.total += 1;
            summary.present += usize::from(record.is_present);
            summary.applied += usize::from(record.is_applied);
            summary.pending += usize::from(record.is_pending());
            summary.orphaned += usize::from(record.is_orphaned());
            summary.unknown += usize::from(!record.is_present && !record.is_applied);
        }
        summary
    }

    /// Returns `true` when every known version is both present and applied.
    pub fn is_in_sync(&self) -> bool {
        self.present == self.total && self.applied == self.total
    }
}
