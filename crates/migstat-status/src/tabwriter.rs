//! Elastic tab-stop formatter.
//!
//! Text written into a [`TabWriter`] is buffered until [`TabWriter::finish`].
//! Each line is split into cells at `\t`; a cell terminated by a tab is part
//! of a column, and the text after the last tab of a line is written as-is.
//! Adjacent lines that share a column form a column block, and every cell in
//! a block is padded to the widest cell of that block plus the configured
//! padding. Cells are left aligned.

use std::fmt;

use crate::config::TableConfig;

struct Cell<'a> {
    text: &'a str,
    width: usize,
}

impl<'a> Cell<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            width: text.chars().count(),
        }
    }
}

struct Line<'a> {
    cells: Vec<Cell<'a>>,
    newline: bool,
}

impl Line<'_> {
    /// Whether this line has a tab-terminated cell in `column`.
    fn has_column(&self, column: usize) -> bool {
        column + 1 < self.cells.len()
    }
}

/// Buffers tab-separated text and aligns it into columns.
#[derive(Debug)]
pub struct TabWriter {
    config: TableConfig,
    buf: String,
}

impl TabWriter {
    /// Create a writer with the given tab-stop parameters.
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            buf: String::new(),
        }
    }

    /// Align everything written so far and return the formatted text.
    pub fn finish(self) -> String {
        let lines = split_lines(&self.buf);
        let mut out = String::with_capacity(self.buf.len() * 2);
        let mut widths = Vec::new();
        self.format(&mut out, &mut widths, &lines, 0, lines.len());
        out
    }

    fn format(
        &self,
        out: &mut String,
        widths: &mut Vec<usize>,
        lines: &[Line<'_>],
        mut line0: usize,
        line1: usize,
    ) {
        let column = widths.len();
        let mut this = line0;
        while this < line1 {
            if !lines[this].has_column(column) {
                this += 1;
                continue;
            }

            // A column block starts here; flush the lines above it.
            self.write_lines(out, widths, &lines[line0..this]);
            line0 = this;

            let mut width = self.config.min_width;
            while this < line1 && lines[this].has_column(column) {
                width = width.max(lines[this].cells[column].width + self.config.padding);
                this += 1;
            }

            widths.push(width);
            self.format(out, widths, lines, line0, this);
            widths.pop();
            line0 = this;
        }
        self.write_lines(out, widths, &lines[line0..line1]);
    }

    fn write_lines(&self, out: &mut String, widths: &[usize], lines: &[Line<'_>]) {
        for line in lines {
            for (j, cell) in line.cells.iter().enumerate() {
                out.push_str(cell.text);
                if let Some(&cell_width) = widths.get(j) {
                    self.write_padding(out, cell.width, cell_width);
                }
            }
            if line.newline {
                out.push('\n');
            }
        }
    }

    fn write_padding(&self, out: &mut String, text_width: usize, cell_width: usize) {
        if self.config.pad_char == '\t' {
            let tab = self.config.tab_width;
            if tab == 0 {
                return;
            }
            let cell_width = cell_width.div_ceil(tab) * tab;
            let tabs = cell_width.saturating_sub(text_width).div_ceil(tab);
            out.extend(std::iter::repeat('\t').take(tabs));
            return;
        }
        let n = cell_width.saturating_sub(text_width);
        out.extend(std::iter::repeat(self.config.pad_char).take(n));
    }
}

impl fmt::Write for TabWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

fn split_lines(buf: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut rest = buf;
    while !rest.is_empty() {
        let (text, newline, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], true, &rest[i + 1..]),
            None => (rest, false, ""),
        };
        lines.push(Line {
            cells: text.split('\t').map(Cell::new).collect(),
            newline,
        });
        rest = next;
    }
    lines
}
