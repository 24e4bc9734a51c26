//! Leveled line writer.
//!
//! Each [`Level`] indents its output by two spaces per level, so nested
//! report sections line up without the caller tracking indentation.

use std::fmt;

/// Indentation level for a [`PrefixWriter`] line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub u8);

impl Level {
    /// No indentation.
    pub const ZERO: Level = Level(0);

    /// Number of spaces written before text at this level.
    pub fn indent(self) -> usize {
        usize::from(self.0) * 2
    }
}

/// Writes text into an inner [`fmt::Write`] with a per-level indent.
#[derive(Debug)]
pub struct PrefixWriter<W> {
    out: W,
}

impl<W: fmt::Write> PrefixWriter<W> {
    /// Wrap `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write formatted text at `level`.
    pub fn write(&mut self, level: Level, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..level.indent() {
            self.out.write_char(' ')?;
        }
        self.out.write_fmt(args)
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
