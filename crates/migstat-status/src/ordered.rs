//! Ascending sequence of distinct migration versions.

use serde::{Deserialize, Serialize};

/// A sorted, duplicate-free sequence of versions.
///
/// The sequence is rebuilt wholesale from a key set and sorted before it is
/// handed out, so [`OrderedVersions::lower_bound`] can always assume sorted
/// input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedVersions(Vec<u64>);

impl OrderedVersions {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `keys` and sort them ascending.
    ///
    /// Callers pass a unique key set (the keys of a map), so no ties occur.
    pub fn rebuild_from<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.0.clear();
        self.0.extend(keys);
        self.sort_ascending();
    }

    /// Sort the sequence by numeric value.
    pub fn sort_ascending(&mut self) {
        self.0.sort_unstable();
    }

    /// Index of the first element `>= target`, or `len()` if none qualifies.
    ///
    /// The sequence must be sorted.
    pub fn lower_bound(&self, target: u64) -> usize {
        self.0.partition_point(|&v| v < target)
    }

    /// Number of versions in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no versions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Version at position `pos`.
    pub fn get(&self, pos: usize) -> Option<u64> {
        self.0.get(pos).copied()
    }

    /// The versions as a slice, ascending.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Iterate the versions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }
}
