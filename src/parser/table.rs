//! Header-aware comma-delimited table.
//!
//! Cells are kept as raw strings. Numeric interpretation happens on lookup
//! through [`Table::value`], which yields NaN for anything that is missing
//! or does not parse.

use log::debug;
use std::collections::HashMap;

/// Rectangular view over a delimited trace: one schema, one row per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Build a table from a header and its rows
    ///
    /// If a column name repeats, lookups by that name resolve to its first occurrence.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(position);
        }

        Self {
            columns,
            rows,
            index,
        }
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of frame rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Raw cell text, `None` if the column or the cell does not exist
    pub fn cell(&self, frame: usize, column: &str) -> Option<&str> {
        let position = *self.index.get(column)?;
        self.cell_at(frame, position)
    }

    /// Raw cell text by column position
    pub fn cell_at(&self, frame: usize, position: usize) -> Option<&str> {
        self.rows
            .get(frame)
            .and_then(|row| row.get(position))
            .map(String::as_str)
    }

    /// Numeric cell value; NaN when absent or unparseable
    pub fn value(&self, frame: usize, column: &str) -> f64 {
        self.cell(frame, column).map_or(f64::NAN, parse_number)
    }

    /// Numeric cell value by column position; NaN when absent or unparseable
    pub fn value_at(&self, frame: usize, position: usize) -> f64 {
        self.cell_at(frame, position).map_or(f64::NAN, parse_number)
    }
}

/// Parse a raw cell as a number
///
/// Surrounding whitespace is ignored; an empty cell, text that is not a
/// number, or a non-finite literal such as `inf` yields NaN rather than zero.
pub fn parse_number(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

/// Parse comma-delimited text whose first non-empty line is the header
///
/// Blank lines are not frames and are skipped. Rows shorter than the header
/// are kept as-is; fields beyond the header width are dropped.
pub fn parse_delimited(text: &str) -> Table {
    let mut lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let columns = match lines.next() {
        Some(header) => split_record(header),
        None => return Table::default(),
    };

    let width = columns.len();
    let rows: Vec<Vec<String>> = lines
        .map(|line| {
            let mut fields = split_record(line);
            fields.truncate(width);
            fields
        })
        .collect();

    debug!("Parsed table: {} columns, {} rows", width, rows.len());

    Table::new(columns, rows)
}

/// Split one record on commas, honouring double-quoted fields
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
