//! A1-notation cell ranges (`A1:H1`, `A2:E2`, ...).

use std::fmt;

/// Inclusive rectangular range, 1-based rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl CellRange {
    /// Block of `rows` x `cols` cells whose top-left corner is column A of `first_row`.
    pub fn block(first_row: usize, rows: usize, cols: usize) -> Self {
        Self {
            start_row: first_row,
            start_col: 1,
            end_row: first_row + rows.max(1) - 1,
            end_col: cols.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn cols(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Range qualified with a worksheet title, e.g. `'Daily Updates'!A1:H1`.
    pub fn qualified(&self, title: &str) -> String {
        format!("{}!{}", quote_title(title), self)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            column_letters(self.start_col),
            self.start_row,
            column_letters(self.end_col),
            self.end_row
        )
    }
}

/// 1 → `A`, 26 → `Z`, 27 → `AA`.
pub fn column_letters(mut col: usize) -> String {
    let mut out = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        out.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Worksheet titles are single-quoted in A1 notation; embedded quotes are doubled.
pub fn quote_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}
