//! Text table rendering for a [`StatusIndex`].

use std::fmt;

use crate::config::TableConfig;
use crate::index::StatusIndex;
use crate::prefix::{Level, PrefixWriter};
use crate::record::status_label;
use crate::tabwriter::TabWriter;

/// Column headings, left to right.
pub const HEADER: [&str; 3] = ["VERSION", "SOURCE STATUS", "DATABASE STATUS"];

/// A renderable view of a [`StatusIndex`].
///
/// Formatting builds the whole table in memory and never touches a stream;
/// the caller decides where the text goes.
#[derive(Debug)]
pub struct StatusTable<'a> {
    index: &'a StatusIndex,
    config: TableConfig,
}

impl<'a> StatusTable<'a> {
    /// A table over `index` with the default tab-stop settings.
    pub fn new(index: &'a StatusIndex) -> Self {
        Self::with_config(index, TableConfig::default())
    }

    /// A table over `index` with explicit tab-stop settings.
    pub fn with_config(index: &'a StatusIndex, config: TableConfig) -> Self {
        Self { index, config }
    }

    fn write_rows<W: fmt::Write>(&self, w: &mut PrefixWriter<W>) -> fmt::Result {
        w.write(Level::ZERO, format_args!("{}\n", HEADER.join("\t")))?;
        for record in self.index.iter() {
            w.write(
                Level::ZERO,
                format_args!(
                    "{}\t{}\t{}\n",
                    record.version,
                    status_label(record.is_present),
                    status_label(record.is_applied),
                ),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for StatusTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = PrefixWriter::new(TabWriter::new(self.config.clone()));
        self.write_rows(&mut w)?;
        f.write_str(&w.into_inner().finish())
    }
}
