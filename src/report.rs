//! Fixed-width comparison tables.
//!
//! Output is for humans, not machines: a `Results (time in ms):` heading, a
//! header row, a dashed rule, then one row per measured operation with both
//! strategies' times and a ratio between them.
//!
//! The ratio direction is per-row, not per-table. The spell-checker table
//! reports ordered / hashed for every row ("how much the hash map improves
//! on the tree"); the reservation table reports ordered / hashed for loading
//! but hashed / ordered for range search and sorting, so a factor above 1.0
//! always reads as "this much slower for the structure not suited to the
//! operation". Tables carry a note naming the direction rather than leaving
//! the asymmetry implicit.

use std::fmt;

const LABEL_WIDTH: usize = 20;
const ORDERED_WIDTH: usize = 8;
const HASHED_WIDTH: usize = 13;

/// Which way a row's ratio is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorDir {
    /// `ordered_ms / hashed_ms`: how much faster the hash map is.
    OrderedOverHashed,
    /// `hashed_ms / ordered_ms`: how much faster the ordered map is.
    HashedOverOrdered,
}

/// One measured operation: a label, both timings, and the ratio direction.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    label: &'static str,
    ordered_ms: f64,
    hashed_ms: f64,
    dir: FactorDir,
}

impl Row {
    /// Build a row. `label` is truncated visually at 20 columns by the table.
    #[must_use]
    pub const fn new(label: &'static str, ordered_ms: f64, hashed_ms: f64, dir: FactorDir) -> Self {
        Self {
            label,
            ordered_ms,
            hashed_ms,
            dir,
        }
    }

    /// The row's ratio in its configured direction.
    #[must_use]
    pub fn factor(&self) -> f64 {
        match self.dir {
            FactorDir::OrderedOverHashed => self.ordered_ms / self.hashed_ms,
            FactorDir::HashedOverOrdered => self.hashed_ms / self.ordered_ms,
        }
    }
}

/// A per-scenario results table.
#[derive(Debug, Clone)]
pub struct Table {
    factor_header: &'static str,
    factor_width: usize,
    note: Option<&'static str>,
    rows: Vec<Row>,
}

impl Table {
    /// Start an empty table. `factor_width` sets the last column's width
    /// (the two scenarios historically use 24 and 22).
    #[must_use]
    pub const fn new(factor_header: &'static str, factor_width: usize) -> Self {
        Self {
            factor_header,
            factor_width,
            note: None,
            rows: Vec::new(),
        }
    }

    /// Attach a one-line note printed under the table.
    #[must_use]
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Append a measured row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results (time in ms):")?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}| {:<ORDERED_WIDTH$} | {:<HASHED_WIDTH$} | {}",
            "", "map", "unordered_map", self.factor_header
        )?;
        writeln!(
            f,
            "{}+{}+{}+{}",
            "-".repeat(LABEL_WIDTH),
            "-".repeat(ORDERED_WIDTH + 2),
            "-".repeat(HASHED_WIDTH + 2),
            "-".repeat(self.factor_width)
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<LABEL_WIDTH$}| {:>ORDERED_WIDTH$.3} | {:>HASHED_WIDTH$.3} | {:>fw$.3}x",
                row.label,
                row.ordered_ms,
                row.hashed_ms,
                row.factor(),
                fw = self.factor_width
            )?;
        }
        if let Some(note) = self.note {
            writeln!(f, "{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FactorDir, Row, Table};

    #[test]
    fn factor_direction_is_per_row() {
        let fwd = Row::new("Loading time", 10.0, 5.0, FactorDir::OrderedOverHashed);
        let rev = Row::new("Range search", 10.0, 5.0, FactorDir::HashedOverOrdered);
        assert!((fwd.factor() - 2.0).abs() < f64::EPSILON);
        assert!((rev.factor() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn render_has_heading_rule_and_aligned_columns() {
        let mut table = Table::new("Improvement factor", 24);
        table.push(Row::new(
            "Loading time",
            12.345,
            6.789,
            FactorDir::OrderedOverHashed,
        ));
        let out = table.to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Results (time in ms):");
        assert!(lines[1].contains("| map      | unordered_map | Improvement factor"));
        assert_eq!(
            lines[2],
            format!(
                "{}+{}+{}+{}",
                "-".repeat(20),
                "-".repeat(10),
                "-".repeat(15),
                "-".repeat(24)
            )
        );
        assert!(lines[3].starts_with("Loading time        | "));
        assert!(lines[3].ends_with('x'));
        assert!(lines[3].contains("12.345"));
        assert!(lines[3].contains("6.789"));
        assert!(lines[3].contains("1.818"));
    }

    #[test]
    fn note_is_rendered_after_the_rows() {
        let table = Table::new("Difference factor", 22).with_note("(factors per row)");
        let out = table.to_string();
        assert!(out.ends_with("(factors per row)\n"));
    }

    #[test]
    fn times_render_with_three_decimals() {
        let mut table = Table::new("Improvement factor", 24);
        table.push(Row::new("Search time", 0.5, 0.25, FactorDir::OrderedOverHashed));
        let out = table.to_string();
        assert!(out.contains("0.500"));
        assert!(out.contains("0.250"));
        assert!(out.contains("2.000x"));
    }
}
