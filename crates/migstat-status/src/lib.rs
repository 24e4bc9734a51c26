//! Migration status index.
//!
//! Reconciles which migration versions exist in the local source tree and
//! which are applied on the database, and renders the result as an aligned
//! text table.
//!
//! # Key Types
//!
//! - [`StatusIndex`] -- Version-keyed records plus an ascending ordered view
//! - [`MigrationRecord`] -- Present/applied facts for one version
//! - [`OrderedVersions`] -- Sorted version sequence with lower-bound search
//! - [`StatusTable`] -- Column-aligned rendering of an index
//! - [`StatusSummary`] -- Pending/orphaned counts

pub mod config;
pub mod index;
pub mod ordered;
pub mod prefix;
pub mod record;
pub mod render;
pub mod summary;
pub mod tabwriter;

pub use config::TableConfig;
pub use index::StatusIndex;
pub use ordered::OrderedVersions;
pub use prefix::{Level, PrefixWriter};
pub use record::{status_label, MigrationRecord};
pub use render::{StatusTable, HEADER};
pub use summary::StatusSummary;
pub use tabwriter::TabWriter;
