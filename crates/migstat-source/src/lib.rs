//! Fact producers for the migration status index.
//!
//! The status index only merges facts; this crate collects them.
//!
//! # Modules
//!
//! - [`discover`] -- Find migration versions in a local directory
//! - [`applied`] -- Read applied-version ledgers exported from cluster members
//! - [`facts`] -- Merge collected versions into a [`migstat_status::StatusIndex`]
//! - [`error`] -- Error types

pub mod applied;
pub mod discover;
pub mod error;
pub mod facts;

pub use applied::{read_ledger, LedgerFormat};
pub use discover::{discover_versions, parse_version, DiscoverOptions};
pub use error::{Result, SourceError};
pub use facts::collect_status;
