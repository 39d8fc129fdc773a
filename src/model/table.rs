//! Table types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A markdown pipe table.
///
/// Header and row widths are rendered as given; rows are neither padded
/// nor truncated to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (may be empty)
    pub headers: Vec<String>,

    /// Body rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from headers and rows.
    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has neither headers nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
    write!(f, "| {} |", cells.join(" | "))
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        if !self.headers.is_empty() {
            write_row(f, &self.headers)?;
            f.write_str("\n")?;
            let dividers = vec!["---".to_string(); self.headers.len()];
            write_row(f, &dividers)?;
            first = false;
        }

        for row in &self.rows {
            if !first {
                f.write_str("\n")?;
            }
            write_row(f, row)?;
            first = false;
        }

        Ok(())
    }
}
